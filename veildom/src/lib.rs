pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod focus;
pub mod scheduler;
pub mod selector;
pub mod transitions;

pub use document::Document;
pub use element::{Display, Element};
pub use error::DomError;
pub use event::{Event, Key, Modifiers};
pub use focus::{collect_tabbable, is_focusable, is_tabbable, tabbable_within};
pub use scheduler::{Debounced, Scheduler, TaskId};
pub use selector::Selector;
pub use transitions::{Easing, TransitionConfig};
