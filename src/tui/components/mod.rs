//! # TUI Components
//!
//! The pieces the form is drawn from.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: form heading and key hint
//! - `StatusLine`: the prompt under the text field
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `InputBox`: the multi-line text field
//!
//! Components receive external data as props (struct fields), never by
//! reaching into `Form`. Each file holds its component's state, events,
//! rendering, event handling and tests.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (heading)
//! ├── status_line.rs   (prompt line)
//! └── input_box/       (text field, cursor, wrapping)
//! ```

pub mod input_box;
mod status_line;
mod title_bar;

pub use input_box::{InputBox, InputEvent};
pub use status_line::{StatusLine, Tone};
pub use title_bar::TitleBar;
