use crate::foundation::core::Rgba8;
use crate::foundation::error::{ArError, ArResult};

/// Text + color label.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Label {
    /// Displayed text.
    pub text: String,
    /// Text color.
    pub color: Rgba8,
}

impl Label {
    fn new(text: impl Into<String>, color: Rgba8) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

/// Push button; only its caption is modelled.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Button {
    /// Caption.
    pub text: String,
}

/// Which collaborators a [`ScreenView`] has bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewBindings {
    /// Bind the "AR objects: N" label.
    pub counter_label: bool,
    /// Bind the status label.
    pub status_label: bool,
    /// Bind the pause/resume button.
    pub toggle_button: bool,
}

impl Default for ViewBindings {
    fn default() -> Self {
        Self {
            counter_label: true,
            status_label: true,
            toggle_button: true,
        }
    }
}

pub(crate) const LABEL_TEXT_COLOR: Rgba8 = Rgba8::rgb(255, 255, 255);

pub(crate) fn counter_text(count: usize) -> String {
    format!("AR objects: {count}")
}

pub(crate) fn status_for(active: bool) -> (&'static str, Rgba8, &'static str) {
    if active {
        ("AR system active", Rgba8::LIME, "Pause tracking")
    } else {
        ("AR system paused", Rgba8::ORANGE, "Resume tracking")
    }
}

/// The widgets surrounding the canvas. Any of them may be unbound.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ScreenView {
    counter_label: Option<Label>,
    status_label: Option<Label>,
    toggle_button: Option<Button>,
}

impl ScreenView {
    /// Build a view in the initial (animation active, no objects) state.
    pub fn new(bindings: ViewBindings) -> Self {
        let (status, status_color, toggle) = status_for(true);
        Self {
            counter_label: bindings
                .counter_label
                .then(|| Label::new(counter_text(0), LABEL_TEXT_COLOR)),
            status_label: bindings
                .status_label
                .then(|| Label::new(status, status_color)),
            toggle_button: bindings.toggle_button.then(|| Button {
                text: toggle.to_owned(),
            }),
        }
    }

    /// View with every widget bound.
    pub fn bound() -> Self {
        Self::new(ViewBindings::default())
    }

    /// View with no widget bound.
    pub fn detached() -> Self {
        Self::new(ViewBindings {
            counter_label: false,
            status_label: false,
            toggle_button: false,
        })
    }

    /// Counter label, if bound.
    pub fn counter_label(&self) -> Option<&Label> {
        self.counter_label.as_ref()
    }

    /// Status label, if bound.
    pub fn status_label(&self) -> Option<&Label> {
        self.status_label.as_ref()
    }

    /// Toggle button, if bound.
    pub fn toggle_button(&self) -> Option<&Button> {
        self.toggle_button.as_ref()
    }

    pub(crate) fn counter_label_mut(&mut self) -> ArResult<&mut Label> {
        self.counter_label
            .as_mut()
            .ok_or_else(|| ArError::ui("counter label is not bound"))
    }

    pub(crate) fn status_label_mut(&mut self) -> ArResult<&mut Label> {
        self.status_label
            .as_mut()
            .ok_or_else(|| ArError::ui("status label is not bound"))
    }

    pub(crate) fn toggle_button_mut(&mut self) -> ArResult<&mut Button> {
        self.toggle_button
            .as_mut()
            .ok_or_else(|| ArError::ui("toggle button is not bound"))
    }
}

impl Default for ScreenView {
    fn default() -> Self {
        Self::bound()
    }
}
