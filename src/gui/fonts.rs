use std::{
    fs,
    path::PathBuf,
    sync::Arc,
};

use eframe::egui;

/// Registers a system CJK font behind egui's defaults so Chinese meanings
/// render. The app stays usable without one, so a miss only logs.
pub fn install_cjk_fallback(ctx: &egui::Context) {
    let Some((path, bytes)) = load_system_cjk_font() else {
        eprintln!("No CJK font found; meanings in Chinese may render as boxes");
        return;
    };

    println!("Loaded CJK font from {}", path.display());

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert("cjk_fallback".to_owned(), Arc::new(egui::FontData::from_owned(bytes)));

    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .push("cjk_fallback".to_owned());

    fonts.families.entry(egui::FontFamily::Monospace).or_default().push("cjk_fallback".to_owned());

    ctx.set_fonts(fonts);
}

fn load_system_cjk_font() -> Option<(PathBuf, Vec<u8>)> {
    let mut candidates: Vec<PathBuf> = Vec::new();

    #[cfg(target_os = "windows")]
    {
        candidates.push(PathBuf::from(r"C:\Windows\Fonts\msyh.ttc"));
        candidates.push(PathBuf::from(r"C:\Windows\Fonts\simsun.ttc"));
        candidates.push(PathBuf::from(r"C:\Windows\Fonts\msjh.ttc"));
    }

    #[cfg(target_os = "macos")]
    {
        candidates.push(PathBuf::from("/System/Library/Fonts/PingFang.ttc"));
        candidates.push(PathBuf::from("/System/Library/Fonts/Supplemental/Songti.ttc"));
    }

    #[cfg(target_os = "linux")]
    {
        candidates.push(PathBuf::from("/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc"));
        candidates.push(PathBuf::from("/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc"));
        candidates.push(PathBuf::from(
            "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
        ));
    }

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match fs::read(&path) {
            Ok(bytes) => return Some((path, bytes)),
            Err(e) => eprintln!("Failed to read font {}: {}", path.display(), e),
        }
    }

    None
}
