pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;

/// `:root` block declaring the palette as CSS custom properties.
/// Rendered ahead of [`GLOBAL_STYLES`], which only refers to the variables.
pub fn palette_css() -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in colors::PALETTE {
        css.push_str(&format!("  {}: {};\n", name, value));
    }
    css.push_str("}\n");
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_declares_every_color() {
        let css = palette_css();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--rose: #e11d48;"));
        assert!(css.contains("--gold: #b8860b;"));
        assert_eq!(css.matches(';').count(), colors::PALETTE.len());
    }

    #[test]
    fn styles_only_use_declared_variables() {
        let declared: Vec<&str> = colors::PALETTE.iter().map(|(name, _)| *name).collect();
        for part in GLOBAL_STYLES.split("var(").skip(1) {
            let name = part.split(')').next().unwrap_or_default();
            assert!(
                declared.contains(&name) || name.starts_with("--font") || name.starts_with("--ease"),
                "undeclared variable {name}"
            );
        }
    }
}
