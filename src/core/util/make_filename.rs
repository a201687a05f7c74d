use crate::core::data::resolution::Resolution;

/// Expands an output filename.
///
/// A bare extension (`"png"` or `".png"`) becomes `{name}_{W}x{H}.png`, or
/// `{name}_{W/dpi}x{H/dpi}_{dpi}dpi.png` when `dpi` is set. Anything with a
/// stem is returned unchanged.
#[must_use]
pub fn make_filename(template: &str, name: &str, resolution: Resolution, dpi: Option<f64>) -> String {
    let extension = if template.contains('.') {
        template.to_string()
    } else {
        format!(".{}", template)
    };

    if !extension.starts_with('.') {
        return extension;
    }

    match dpi {
        Some(dpi) => {
            let width = resolution.width as f64 / dpi;
            let height = resolution.height as f64 / dpi;
            format!("{}_{}x{}_{}dpi{}", name, width, height, dpi, extension)
        }
        None => format!("{}_{}{}", name, resolution, extension),
    }
}
