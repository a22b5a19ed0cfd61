//! Live page adapter: an HTML document standing in for the rendered game
//! page.
//!
//! Whoever refreshes the document plays the renderer. [`DomPage::update`]
//! diffs the task list and notifies subscribers about added entries, so the
//! scheduler reacts to board changes without polling the document itself.

use std::sync::Mutex;

use scraper::{ElementRef, Html, Selector};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::ports::page::{TaskElement, TaskListChange, TaskPage};

/// Task elements inside the board container.
const TASK_SELECTOR: &str = "div.TasksPanel_taskList__2xh4k div.RandomTask_randomTask__3B9fA";
/// Name sub-element of a task element.
const NAME_SELECTOR: &str = ".RandomTask_name__1hl1b";
/// Character-name element elsewhere on the page.
const CHARACTER_SELECTOR: &str = ".CharacterName_name__1amXp";

struct PageState {
    html: String,
    /// Raw markup of each task element, used to detect added nodes between
    /// updates.
    task_markup: Vec<String>,
}

/// In-memory rendered page, refreshed via [`DomPage::update`].
///
/// The document is re-parsed on each read; the page never caches parse
/// results across updates.
pub struct DomPage {
    location: String,
    state: Mutex<PageState>,
    subscribers: Mutex<Vec<UnboundedSender<TaskListChange>>>,
}

impl DomPage {
    /// Creates a page at `location` holding an initial document.
    #[must_use]
    pub fn new(location: impl Into<String>, html: impl Into<String>) -> Self {
        let html = html.into();
        let task_markup = collect_task_markup(&html);
        Self {
            location: location.into(),
            state: Mutex::new(PageState { html, task_markup }),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Replaces the document.
    ///
    /// One call is one mutation batch: when the new document contains task
    /// elements that were not present before, every subscriber receives
    /// exactly one [`TaskListChange`]. Updates that only remove or keep
    /// entries stay silent.
    pub fn update(&self, html: impl Into<String>) {
        let html = html.into();
        let task_markup = collect_task_markup(&html);
        let added = {
            let mut state = self.state.lock().expect("page state lock poisoned");
            let added = has_added_tasks(&state.task_markup, &task_markup);
            state.html = html;
            state.task_markup = task_markup;
            added
        };
        if added {
            self.notify();
        }
    }

    fn notify(&self) {
        let mut subscribers = self.subscribers.lock().expect("subscriber lock poisoned");
        subscribers.retain(|sender| sender.send(TaskListChange).is_ok());
    }

    fn with_document<T>(&self, read: impl FnOnce(&Html) -> T) -> T {
        let state = self.state.lock().expect("page state lock poisoned");
        let document = Html::parse_document(&state.html);
        read(&document)
    }
}

impl TaskPage for DomPage {
    fn location(&self) -> String {
        self.location.clone()
    }

    fn character_name(&self) -> Option<String> {
        self.with_document(|document| {
            document
                .select(&selector(CHARACTER_SELECTOR))
                .next()
                .map(|element| collapsed_text(element))
                .filter(|name| !name.is_empty())
        })
    }

    fn task_elements(&self) -> Vec<TaskElement> {
        let task_selector = selector(TASK_SELECTOR);
        let name_selector = selector(NAME_SELECTOR);
        let line_selector = selector("div");
        self.with_document(|document| {
            document
                .select(&task_selector)
                .map(|element| {
                    let name = element
                        .select(&name_selector)
                        .next()
                        .map(|sub| collapsed_text(sub))
                        .filter(|text| !text.is_empty());
                    // The progress line lives in one of the descendant divs;
                    // the extractor picks it out by prefix.
                    let lines = element
                        .select(&line_selector)
                        .map(|div| collapsed_text(div))
                        .filter(|text| !text.is_empty())
                        .collect();
                    TaskElement { name, lines }
                })
                .collect()
        })
    }

    fn subscribe(&self) -> UnboundedReceiver<TaskListChange> {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.subscribers.lock().expect("subscriber lock poisoned").push(sender);
        receiver
    }
}

/// Parses a selector that is known to be valid at compile time.
fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector parses")
}

/// Concatenated text of an element's descendants, whitespace-trimmed.
fn collapsed_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn collect_task_markup(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document.select(&selector(TASK_SELECTOR)).map(|element| element.html()).collect()
}

/// An update counts as adding nodes when the new board holds a task entry
/// the old board did not (multiset containment on raw markup), so replacing
/// one entry with another also counts.
fn has_added_tasks(old: &[String], new: &[String]) -> bool {
    let mut remaining: Vec<&String> = old.iter().collect();
    new.iter().any(|markup| match remaining.iter().position(|o| *o == markup) {
        Some(index) => {
            remaining.swap_remove(index);
            false
        }
        None => true,
    })
}
