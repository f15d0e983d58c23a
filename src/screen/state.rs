use crate::foundation::error::ArResult;
use crate::scene::object::ArObject;
use crate::scene::spawner::ObjectSpawner;
use crate::screen::view::{ScreenView, counter_text, status_for};

/// Button presses the screen reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiEvent {
    /// "Add object" button.
    Add,
    /// "Pause / resume tracking" button.
    Toggle,
    /// "Clear" button.
    Clear,
}

/// The AR screen: the object list, the animation flag and the widgets around the canvas.
///
/// All mutation goes through the three `on_*` handlers, normally via [`ArScreen::dispatch`].
#[derive(Debug, Clone)]
pub struct ArScreen {
    objects: Vec<ArObject>,
    animation_active: bool,
    spawner: ObjectSpawner,
    view: ScreenView,
    ui_failures: u64,
}

impl ArScreen {
    /// New screen with no objects and the animation running.
    pub fn new(spawner: ObjectSpawner, view: ScreenView) -> Self {
        Self {
            objects: Vec::new(),
            animation_active: true,
            spawner,
            view,
            ui_failures: 0,
        }
    }

    /// Objects in creation order.
    pub fn objects(&self) -> &[ArObject] {
        &self.objects
    }

    /// Whether the redraw timer currently requests redraws.
    pub fn is_animation_active(&self) -> bool {
        self.animation_active
    }

    /// Widgets around the canvas.
    pub fn view(&self) -> &ScreenView {
        &self.view
    }

    /// Handler failures swallowed by [`ArScreen::dispatch`] so far.
    pub fn ui_failures(&self) -> u64 {
        self.ui_failures
    }

    /// Run the handler for `event`. Handler errors are logged and swallowed.
    pub fn dispatch(&mut self, event: UiEvent) {
        let res = match event {
            UiEvent::Add => self.on_add_object(),
            UiEvent::Toggle => self.on_toggle_tracking(),
            UiEvent::Clear => self.on_clear(),
        };
        if let Err(err) = res {
            self.ui_failures += 1;
            tracing::warn!(?event, error = %err, "ui handler failed");
        }
    }

    /// Append a freshly spawned object and refresh the counter label.
    pub fn on_add_object(&mut self) -> ArResult<()> {
        let obj = self.spawner.spawn(self.objects.len());
        tracing::debug!(
            id = obj.id,
            kind = ?obj.kind,
            x = obj.position.x,
            y = obj.position.y,
            size = obj.size,
            "object added"
        );
        self.objects.push(obj);

        self.view.counter_label_mut()?.text = counter_text(self.objects.len());
        Ok(())
    }

    /// Flip the animation flag and refresh the toggle button and status label.
    pub fn on_toggle_tracking(&mut self) -> ArResult<()> {
        self.animation_active = !self.animation_active;
        tracing::debug!(active = self.animation_active, "tracking toggled");

        let (status, color, toggle) = status_for(self.animation_active);
        self.view.toggle_button_mut()?.text = toggle.to_owned();
        let label = self.view.status_label_mut()?;
        label.text = status.to_owned();
        label.color = color;
        Ok(())
    }

    /// Drop every object and reset the counter label.
    pub fn on_clear(&mut self) -> ArResult<()> {
        tracing::debug!(removed = self.objects.len(), "objects cleared");
        self.objects.clear();

        self.view.counter_label_mut()?.text = counter_text(0);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/screen/state.rs"]
mod tests;
