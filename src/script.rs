//! Gesture scripts: a YAML list of user gestures replayed in order.
//!
//! ```yaml
//! steps:
//!   - init
//!   - navigate: { item: empty, input: "https://example.com" }
//!   - type: { item: empty, value: "exa" }
//!   - drop: { x: 300, y: 200, text: "a dropped note" }
//!   - tap: { item: "text:a dropped note" }
//!   - drag_out: { item: "#3", direction: left }
//! ```
//!
//! Items are referenced as `empty` (the visible empty item), `#<n>` (an
//! item id), `doc:<id>` or `text:<note>` (the visible item showing that
//! document).

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::NavigatorSettings;
use crate::context::ServiceContext;
use crate::error::ScriptError;
use crate::navigator::{DragDirection, DropPayload, NavigationTarget, Navigator};
use crate::ports::{DocId, ItemId};

/// A reference to a canvas item, resolved when its step runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ItemRef {
    /// The visible empty item.
    Empty,
    /// An item by id.
    Id(ItemId),
    /// The visible item showing a document.
    Doc(DocId),
    /// The visible item showing the note with this exact text.
    Text(String),
}

impl FromStr for ItemRef {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ScriptError::BadItemRef(s.to_string());
        if s == "empty" {
            return Ok(Self::Empty);
        }
        if let Some(n) = s.strip_prefix('#') {
            return n.parse().map(|n| Self::Id(ItemId(n))).map_err(|_| bad());
        }
        if let Some(id) = s.strip_prefix("doc:") {
            return if id.is_empty() { Err(bad()) } else { Ok(Self::Doc(DocId::new(id))) };
        }
        if let Some(text) = s.strip_prefix("text:") {
            return Ok(Self::Text(text.to_string()));
        }
        Err(bad())
    }
}

impl TryFrom<String> for ItemRef {
    type Error = ScriptError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ItemRef> for String {
    fn from(value: ItemRef) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty"),
            Self::Id(id) => write!(f, "{id}"),
            Self::Doc(doc_id) => write!(f, "doc:{doc_id}"),
            Self::Text(text) => write!(f, "text:{text}"),
        }
    }
}

/// One user gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    /// Reset the canvas.
    Init,
    /// Enter text into, or pick a document for, an item.
    Navigate {
        /// Item to populate.
        item: ItemRef,
        /// Typed input (URL or note text).
        #[serde(default)]
        input: Option<String>,
        /// A known document; wins over `input`.
        #[serde(default)]
        doc: Option<DocId>,
    },
    /// Drop data onto the canvas.
    Drop {
        /// Drop point, horizontal.
        x: f64,
        /// Drop point, vertical.
        y: f64,
        /// Dropped data.
        #[serde(flatten)]
        payload: DropPayload,
    },
    /// Tap an item.
    Tap {
        /// Item tapped.
        item: ItemRef,
    },
    /// Drag an item off the canvas.
    DragOut {
        /// Item dragged.
        item: ItemRef,
        /// Edge it left through.
        direction: DragDirection,
    },
    /// Type into an empty item.
    Type {
        /// Item typed into.
        item: ItemRef,
        /// New input value.
        value: String,
    },
}

/// A named list of gestures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Optional label.
    #[serde(default)]
    pub name: Option<String>,
    /// Gestures, run in order.
    pub steps: Vec<Gesture>,
}

impl Script {
    /// Parses a script from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML does not describe a script.
    pub fn from_yaml(yaml: &str) -> Result<Self, ScriptError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Reads a script file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ScriptError::Read { path: path.display().to_string(), source })?;
        Self::from_yaml(&content)
    }
}

/// Runs scripts against a service context, one gesture at a time.
pub struct ScriptRunner<'a> {
    ctx: &'a ServiceContext,
    navigator: Navigator<'a>,
}

impl<'a> ScriptRunner<'a> {
    /// Creates a runner driving `ctx`.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, settings: &'a NavigatorSettings) -> Self {
        Self { ctx, navigator: Navigator::new(ctx, settings) }
    }

    /// Runs every step, returning one summary line per step.
    ///
    /// Stops at the first failing step.
    ///
    /// # Errors
    ///
    /// Returns an error naming the step whose item could not be resolved or
    /// whose gesture failed.
    pub fn run(&self, script: &Script) -> Result<Vec<String>, ScriptError> {
        script
            .steps
            .iter()
            .enumerate()
            .map(|(i, gesture)| self.step(i + 1, gesture))
            .collect()
    }

    fn step(&self, step: usize, gesture: &Gesture) -> Result<String, ScriptError> {
        debug!(step, ?gesture, "running step");
        let gesture_err = |source| ScriptError::Gesture { step, source };

        match gesture {
            Gesture::Init => {
                let empty = self.navigator.init_canvas().map_err(gesture_err)?;
                Ok(format!("init: empty item {empty}"))
            }
            Gesture::Navigate { item, input, doc } => {
                let target = match (doc, input) {
                    (Some(doc_id), _) => NavigationTarget::Doc(doc_id.clone()),
                    (None, Some(input)) => NavigationTarget::Input(input.clone()),
                    (None, None) => return Err(ScriptError::MissingTarget { step }),
                };
                let item_id = self.resolve(step, item)?;
                let shown = self.navigator.navigate_to(item_id, &target).map_err(gesture_err)?;
                Ok(match shown {
                    Some(doc_id) => format!("navigate {item_id}: showing {doc_id}"),
                    None => format!("navigate {item_id}: blank input ignored"),
                })
            }
            Gesture::Drop { x, y, payload } => {
                match self.navigator.handle_drop(*x, *y, payload) {
                    Some(item_id) => {
                        let doc_id = self
                            .ctx
                            .canvas
                            .get_item(item_id)
                            .map_err(|e| gesture_err(e.into()))?
                            .doc_id;
                        Ok(format!("drop at ({x}, {y}): item {item_id} shows {doc_id}"))
                    }
                    None => Ok(format!("drop at ({x}, {y}): empty payload ignored")),
                }
            }
            Gesture::Tap { item } => {
                let item_id = self.resolve(step, item)?;
                self.navigator.handle_tap(item_id).map_err(gesture_err)?;
                Ok(format!("tap {item_id}"))
            }
            Gesture::DragOut { item, direction } => {
                let item_id = self.resolve(step, item)?;
                self.navigator.handle_dragged_out(item_id, *direction).map_err(gesture_err)?;
                Ok(format!("drag_out {item_id}"))
            }
            Gesture::Type { item, value } => {
                let item_id = self.resolve(step, item)?;
                self.navigator.type_input(item_id, value);
                Ok(format!("type {item_id}: {value:?}"))
            }
        }
    }

    fn resolve(&self, step: usize, item: &ItemRef) -> Result<ItemId, ScriptError> {
        let doc_id = match item {
            ItemRef::Id(item_id) => return Ok(*item_id),
            ItemRef::Empty => Some(DocId::empty_item()),
            ItemRef::Doc(doc_id) => Some(doc_id.clone()),
            ItemRef::Text(text) => self.ctx.graph.get_doc_with_text(text),
        };
        doc_id
            .and_then(|doc_id| self.ctx.canvas.get_item_id_for_doc_id(&doc_id).ok())
            .ok_or_else(|| ScriptError::UnresolvedItem { step, reference: item.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn item_refs_parse_and_print() {
        for raw in ["empty", "#4", "doc:doc-1", "text:hello world"] {
            let parsed: ItemRef = raw.parse().unwrap();
            assert_eq!(parsed.to_string(), raw);
        }
        assert_eq!("#4".parse::<ItemRef>().unwrap(), ItemRef::Id(ItemId(4)));
        assert!("#x".parse::<ItemRef>().is_err());
        assert!("doc:".parse::<ItemRef>().is_err());
        assert!("nothing".parse::<ItemRef>().is_err());
    }

    #[test]
    fn parses_every_gesture() {
        let yaml = r##"
name: tour
steps:
  - init
  - navigate: { item: empty, input: "https://example.com" }
  - navigate: { item: "#2", doc: doc-1 }
  - drop: { x: 10, y: 20.5, text: hi }
  - tap: { item: "doc:doc-1" }
  - drag_out: { item: "text:hi", direction: right }
  - type: { item: empty, value: exa }
"##;
        let script = Script::from_yaml(yaml).unwrap();
        assert_eq!(script.name.as_deref(), Some("tour"));
        assert_eq!(script.steps.len(), 7);
        assert_eq!(script.steps[0], Gesture::Init);
        assert_eq!(
            script.steps[3],
            Gesture::Drop {
                x: 10.0,
                y: 20.5,
                payload: DropPayload { text: Some("hi".into()), ..DropPayload::default() },
            }
        );
        assert_eq!(
            script.steps[5],
            Gesture::DragOut { item: ItemRef::Text("hi".into()), direction: DragDirection::Right }
        );
    }

    #[test]
    fn bad_item_ref_is_a_parse_error() {
        let err = Script::from_yaml("steps:\n  - tap: { item: somewhere }\n").unwrap_err();
        assert!(err.to_string().contains("invalid item reference"));
    }

    #[test]
    fn runs_a_navigation_session() {
        let mut settings = Settings::default();
        settings.navigator.seed_welcome = false;
        let ctx = ServiceContext::deterministic(&settings);
        let runner = ScriptRunner::new(&ctx, &settings.navigator);

        let script = Script::from_yaml(
            r#"
steps:
  - init
  - navigate: { item: empty, input: "https://example.com" }
  - navigate: { item: empty, input: "a note" }
  - tap: { item: "doc:doc-1" }
"#,
        )
        .unwrap();
        let lines = runner.run(&script).unwrap();

        assert_eq!(lines[0], "init: empty item #1");
        assert_eq!(lines[1], "navigate #1: showing doc-1");
        assert_eq!(lines[2], "navigate #2: showing doc-2");
        let page = ctx.graph.get_friends(&DocId::new("doc-1"));
        assert_eq!(page.target_doc_ids, vec![DocId::new("doc-2")]);
    }

    #[test]
    fn failing_step_is_reported_by_number() {
        let settings = Settings::default();
        let ctx = ServiceContext::deterministic(&settings);
        let runner = ScriptRunner::new(&ctx, &settings.navigator);

        let script = Script::from_yaml("steps:\n  - init\n  - tap: { item: \"#99\" }\n").unwrap();
        let err = runner.run(&script).unwrap_err();
        assert_eq!(err.to_string(), "step 2: canvas error: unknown item #99");

        let script = Script::from_yaml("steps:\n  - tap: { item: \"text:missing\" }\n").unwrap();
        assert!(matches!(
            runner.run(&script).unwrap_err(),
            ScriptError::UnresolvedItem { step: 1, .. }
        ));

        let script = Script::from_yaml("steps:\n  - navigate: { item: empty }\n").unwrap();
        assert!(matches!(runner.run(&script).unwrap_err(), ScriptError::MissingTarget { step: 1 }));
    }
}
