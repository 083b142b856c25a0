//! Task projection for the conversational UI
//!
//! Pure, stateless transformation from stored task records into the item
//! structures the list and collection renderings consume. Recomputed on
//! every render; nothing here is persisted.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::task::TaskRecord;

/// Upper bound on item titles in the list/collection surfaces.
pub const TITLE_DISPLAY_CHARS: usize = 80;

/// Reference to an image shown next to a rendered item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ImageSource {
    pub url: String,
    pub alt: String,
}

/// Display-ready projection of a single task record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RenderedItem {
    /// Stable key, derived from the task id
    pub key: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageSource>,
}

/// Project task records into rendered items, preserving input order.
///
/// Deterministic: the same records always produce the same items. The
/// caller may supply a placeholder image to attach to every item; no
/// image is required.
pub fn project(tasks: &[TaskRecord], placeholder: Option<&ImageSource>) -> Vec<RenderedItem> {
    tasks
        .iter()
        .map(|task| RenderedItem {
            key: task.id.to_string(),
            title: display_title(&task.content),
            description: Some(added_on(task.created_at)),
            image: placeholder.cloned(),
        })
        .collect()
}

fn added_on(created_at: DateTime<Utc>) -> String {
    format!("Added {}", created_at.format("%b %d, %Y"))
}

/// Truncate oversized content on a char boundary, with an ellipsis.
fn display_title(content: &str) -> String {
    if content.chars().count() <= TITLE_DISPLAY_CHARS {
        return content.to_string();
    }

    let mut title: String = content.chars().take(TITLE_DISPLAY_CHARS - 1).collect();
    title.push('…');
    title
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::TaskId;
    use crate::identity::UserIdentity;
    use pretty_assertions::assert_eq;

    fn record(content: &str) -> TaskRecord {
        TaskRecord {
            id: TaskId::generate(),
            owner: UserIdentity::from("user-a"),
            content: content.to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(project(&[], None), vec![]);
    }

    #[test]
    fn preserves_order_and_is_deterministic() {
        let tasks = vec![record("first"), record("second"), record("third")];

        let once = project(&tasks, None);
        let twice = project(&tasks, None);

        assert_eq!(once, twice);
        assert_eq!(
            once.iter().map(|i| i.title.as_str()).collect::<Vec<_>>(),
            vec!["first", "second", "third"]
        );
    }

    #[test]
    fn keys_are_stable_and_derived_from_ids() {
        let tasks = vec![record("buy milk")];
        let items = project(&tasks, None);
        assert_eq!(items[0].key, tasks[0].id.to_string());
    }

    #[test]
    fn oversized_titles_are_truncated_on_char_boundaries() {
        let long = "ä".repeat(TITLE_DISPLAY_CHARS * 2);
        let items = project(&[record(&long)], None);

        assert_eq!(items[0].title.chars().count(), TITLE_DISPLAY_CHARS);
        assert!(items[0].title.ends_with('…'));

        // At the limit, no truncation
        let exact = "a".repeat(TITLE_DISPLAY_CHARS);
        let items = project(&[record(&exact)], None);
        assert_eq!(items[0].title, exact);
    }

    #[test]
    fn placeholder_image_is_attached_when_supplied() {
        let image = ImageSource {
            url: "https://example.com/logo.png".to_string(),
            alt: "logo".to_string(),
        };

        let items = project(&[record("buy milk")], Some(&image));
        assert_eq!(items[0].image.as_ref(), Some(&image));

        let items = project(&[record("buy milk")], None);
        assert_eq!(items[0].image, None);
    }
}
