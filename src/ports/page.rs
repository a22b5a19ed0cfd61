//! Page port for reading the game's task board.

use tokio::sync::mpsc::UnboundedReceiver;

/// Notification that task entries were added to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskListChange;

/// Raw pieces of one task element, before parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskElement {
    /// Text of the name sub-element, if the element has one.
    pub name: Option<String>,
    /// Collapsed text of each block inside the element, in document order.
    /// One of them is expected to be the progress line.
    pub lines: Vec<String>,
}

/// Read access to the rendered game page.
///
/// The live adapter stands in for the host page; tests substitute a scripted
/// page. All reads observe whatever the page currently shows; the port has
/// no notion of history.
pub trait TaskPage: Send + Sync {
    /// Current page location, used as the snapshot's `location` field.
    fn location(&self) -> String;

    /// Text of the character-name element, if the page has one.
    fn character_name(&self) -> Option<String>;

    /// The task elements currently on the board, in board order.
    fn task_elements(&self) -> Vec<TaskElement>;

    /// Subscribes to task-list change notifications.
    ///
    /// Each mutation batch that adds task entries delivers one
    /// [`TaskListChange`] to every receiver obtained from this method.
    fn subscribe(&self) -> UnboundedReceiver<TaskListChange>;
}
