use eframe::egui::{
    self,
    Color32,
    RichText,
};

/// Dracula-flavored palette used for the word display and modal accents.
#[derive(Clone)]
pub struct Theme {
    background: Color32,
    foreground: Color32,
    comment: Color32,
    purple: Color32,
    orange: Color32,
    red: Color32,
}

impl Theme {
    //Colors from:
    //https://github.com/ShabbirHasan1/egui_dracula/blob/master/src/lib.rs
    pub fn dracula() -> Self {
        Self {
            background: Color32::from_rgb(0x28, 0x2a, 0x36),
            foreground: Color32::from_rgb(0xf8, 0xf8, 0xf2),
            comment: Color32::from_rgb(0x62, 0x72, 0xa4),
            purple: Color32::from_rgb(0xbd, 0x93, 0xf9),
            orange: Color32::from_rgb(0xff, 0xb8, 0x6c),
            red: Color32::from_rgb(0xff, 0x55, 0x55),
        }
    }

    pub fn heading(&self, content: &str) -> RichText {
        RichText::new(content).color(self.purple)
    }

    pub fn bold(&self, content: &str) -> RichText {
        RichText::new(content).color(self.orange).strong()
    }

    pub fn hint(&self, content: &str) -> RichText {
        RichText::new(content).color(self.comment)
    }

    pub fn red(&self) -> Color32 {
        self.red
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dracula()
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = theme.background;
    visuals.window_fill = theme.background;
    visuals.override_text_color = Some(theme.foreground);
    ctx.set_visuals(visuals);
}
