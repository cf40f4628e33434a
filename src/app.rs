use crate::config::PaintConfig;
use crate::input::{CanvasController, Tool};
use crate::model::PaintModel;
use crate::panels::{central_panel, tools_panel};

/// Values restored when the app is restarted
#[derive(serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
struct PersistedSettings {
    config: Option<PaintConfig>,
    tool: Tool,
}

pub struct PaintApp {
    model: PaintModel,
    controller: CanvasController,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_config(PaintConfig::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    ///
    /// Settings saved by a previous run win over `config`.
    pub fn new(cc: &eframe::CreationContext<'_>, config: PaintConfig) -> Self {
        let settings: PersistedSettings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        let config = match settings.config {
            Some(saved) if saved.validate().is_ok() => saved,
            Some(_) => {
                log::warn!("Ignoring invalid saved settings");
                config
            }
            None => config,
        };

        let mut app = Self::with_config(config);
        app.controller.set_tool(settings.tool);
        app
    }

    pub fn with_config(config: PaintConfig) -> Self {
        Self {
            model: PaintModel::with_config(config),
            controller: CanvasController::default(),
        }
    }

    pub fn model(&self) -> &PaintModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut PaintModel {
        &mut self.model
    }

    pub fn controller(&self) -> &CanvasController {
        &self.controller
    }

    /// Split borrow used by the canvas to feed pointer events
    pub fn model_and_controller(&mut self) -> (&mut PaintModel, &mut CanvasController) {
        (&mut self.model, &mut self.controller)
    }

    /// Switch tools. Abandons a gesture that is somehow still running.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.model.has_active_command() {
            if let Err(err) = self.model.cancel_command() {
                log::warn!("Could not cancel active command: {}", err);
            }
        }
        self.controller.set_tool(tool);
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedSettings {
            config: Some(PaintConfig {
                pen: self.model.pen(),
                brush: self.model.brush(),
                ..self.model.config().clone()
            }),
            tool: self.controller.tool(),
        };
        eframe::set_value(storage, eframe::APP_KEY, &settings);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
