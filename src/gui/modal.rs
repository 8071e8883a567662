use eframe::egui;

/// A centered window with a dimmed backdrop, carrying working data of type
/// `T` while it is open.
pub struct Modal<T> {
    open: bool,
    title: String,
    data: T,
    config: ModalConfig,
}

#[derive(Clone)]
pub struct ModalConfig {
    pub fixed_size: Option<egui::Vec2>,
    pub show_overlay: bool,
    pub close_on_outside_click: bool,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self { fixed_size: None, show_overlay: true, close_on_outside_click: true }
    }
}

pub enum ModalResult<T> {
    Confirmed(T),
    Cancelled,
}

impl<T: Default> Modal<T> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            open: false,
            title: title.into(),
            data: T::default(),
            config: ModalConfig::default(),
        }
    }
}

impl<T> Modal<T> {
    pub fn with_config(mut self, config: ModalConfig) -> Self {
        self.config = config;
        self
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Draws the modal while it is open. The content closure reports the
    /// user's decision; any decision closes the modal.
    pub fn show<F>(&mut self, ctx: &egui::Context, content: F) -> Option<ModalResult<T>>
    where
        F: FnOnce(&mut egui::Ui, &mut T) -> Option<ModalResult<T>>,
    {
        if !self.open {
            return None;
        }

        let mut outside_click = false;
        if self.config.show_overlay {
            outside_click = self.show_overlay(ctx);
        }

        let mut window = egui::Window::new(&self.title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO);

        if let Some(size) = self.config.fixed_size {
            window = window.fixed_size(size);
        }

        let mut result = None;
        window.show(ctx, |ui| {
            result = content(ui, &mut self.data);
        });

        if result.is_some() {
            self.open = false;
        } else if outside_click && self.config.close_on_outside_click {
            self.open = false;
            result = Some(ModalResult::Cancelled);
        }

        result
    }

    fn show_overlay(&self, ctx: &egui::Context) -> bool {
        egui::Area::new(egui::Id::new("modal_overlay"))
            .order(egui::Order::Background)
            .fixed_pos(egui::Pos2::ZERO)
            .show(ctx, |ui| {
                let screen_rect = ctx.screen_rect();
                let (_rect, response) =
                    ui.allocate_exact_size(screen_rect.size(), egui::Sense::click());
                ui.painter().rect_filled(screen_rect, 0.0, egui::Color32::from_black_alpha(100));
                response.clicked()
            })
            .inner
    }
}

pub fn action_buttons<T: Clone>(
    ui: &mut egui::Ui,
    data: &T,
    confirm_text: &str,
    cancel_text: &str,
) -> Option<ModalResult<T>> {
    ui.horizontal(|ui| {
        if ui.button(confirm_text).clicked() {
            Some(ModalResult::Confirmed(data.clone()))
        } else if ui.button(cancel_text).clicked() {
            Some(ModalResult::Cancelled)
        } else {
            None
        }
    })
    .inner
}
