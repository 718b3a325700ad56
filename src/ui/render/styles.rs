use crate::config::Config;
use lipgloss::{Color, Style};

/// Styling for the focusing and blurring of the folders pane.
#[derive(Clone)]
pub struct FoldersStyle {
    pub focused: FoldersBaseStyle,
    pub blurred: FoldersBaseStyle,
}

#[derive(Clone)]
pub struct FoldersBaseStyle {
    pub title_bar: Style,
    pub selected: Style,
    pub unselected: Style,
}

/// Styling for the focusing and blurring of the snippets pane, including
/// the copied/deleted flash variants.
#[derive(Clone)]
pub struct SnippetsStyle {
    pub focused: SnippetsBaseStyle,
    pub blurred: SnippetsBaseStyle,
}

#[derive(Clone)]
pub struct SnippetsBaseStyle {
    pub title_bar: Style,
    pub selected_title: Style,
    pub unselected_title: Style,
    pub selected_subtitle: Style,
    pub unselected_subtitle: Style,
    pub copied_title_bar: Style,
    pub copied_title: Style,
    pub copied_subtitle: Style,
    pub deleted_title_bar: Style,
    pub deleted_title: Style,
    pub deleted_subtitle: Style,
}

/// Styling for the focusing and blurring of the content pane.
#[derive(Clone)]
pub struct ContentStyle {
    pub focused: ContentBaseStyle,
    pub blurred: ContentBaseStyle,
}

#[derive(Clone)]
pub struct ContentBaseStyle {
    pub title_bar: Style,
    pub line_number: Style,
    pub empty_hint: Style,
    pub empty_hint_key: Style,
}

/// All styles for the application, constructed once from the resolved
/// configuration and passed explicitly to the pane renderers.
#[derive(Clone)]
pub struct Styles {
    pub folders: FoldersStyle,
    pub snippets: SnippetsStyle,
    pub content: ContentStyle,
    pub status_bar: Style,
    pub status_key: Style,
}

/// Parses a `#RRGGBB` string, falling back to the given rgb triple.
fn parse_color(s: &str, fallback: (u8, u8, u8)) -> Color {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() == 6 {
        let channels = (
            u8::from_str_radix(&hex[0..2], 16),
            u8::from_str_radix(&hex[2..4], 16),
            u8::from_str_radix(&hex[4..6], 16),
        );
        if let (Ok(r), Ok(g), Ok(b)) = channels {
            return Color::from_rgb(r, g, b);
        }
    }
    Color::from_rgb(fallback.0, fallback.1, fallback.2)
}

/// Builds the style tree from the configured colors.
pub fn default_styles(config: &Config) -> Styles {
    let background = parse_color(&config.background, (38, 38, 38));
    let black = parse_color(&config.black, (55, 59, 65));
    let gray = parse_color(&config.gray, (38, 38, 38));
    let bright_gray = parse_color(&config.bright_gray, (98, 98, 98));
    let white = parse_color(&config.white, (255, 255, 255));
    let red = parse_color(&config.red, (164, 96, 96));
    let bright_red = parse_color(&config.bright_red, (228, 147, 147));
    let green = parse_color(&config.green, (82, 114, 81));
    let bright_green = parse_color(&config.bright_green, (188, 225, 175));
    let blue = parse_color(&config.primary_color_subdued, (100, 112, 141));
    let bright_blue = parse_color(&config.primary_color, (175, 190, 225));

    let status = if config.status_color.is_empty() {
        gray.clone()
    } else {
        parse_color(&config.status_color, (38, 38, 38))
    };

    Styles {
        folders: FoldersStyle {
            focused: FoldersBaseStyle {
                title_bar: Style::new()
                    .background(blue.clone())
                    .foreground(white.clone())
                    .padding(0, 1, 0, 1),
                selected: Style::new().foreground(bright_blue.clone()),
                unselected: Style::new().foreground(bright_gray.clone()),
            },
            blurred: FoldersBaseStyle {
                title_bar: Style::new()
                    .background(background.clone())
                    .foreground(bright_gray.clone())
                    .padding(0, 1, 0, 1),
                selected: Style::new().foreground(bright_blue.clone()),
                unselected: Style::new().foreground(gray.clone()),
            },
        },
        snippets: SnippetsStyle {
            focused: SnippetsBaseStyle {
                title_bar: Style::new()
                    .background(blue.clone())
                    .foreground(white.clone())
                    .padding(0, 1, 0, 1),
                selected_title: Style::new().foreground(bright_blue.clone()),
                unselected_title: Style::new().foreground(bright_gray.clone()),
                selected_subtitle: Style::new().foreground(blue.clone()),
                unselected_subtitle: Style::new().foreground(gray.clone()),
                copied_title_bar: Style::new()
                    .background(green.clone())
                    .foreground(white.clone())
                    .padding(0, 1, 0, 1),
                copied_title: Style::new().foreground(bright_green.clone()),
                copied_subtitle: Style::new().foreground(green.clone()),
                deleted_title_bar: Style::new()
                    .background(red.clone())
                    .foreground(white.clone())
                    .padding(0, 1, 0, 1),
                deleted_title: Style::new().foreground(bright_red.clone()),
                deleted_subtitle: Style::new().foreground(red.clone()),
            },
            blurred: SnippetsBaseStyle {
                title_bar: Style::new()
                    .background(background.clone())
                    .foreground(bright_gray.clone())
                    .padding(0, 1, 0, 1),
                selected_title: Style::new().foreground(bright_blue.clone()),
                unselected_title: Style::new().foreground(gray.clone()),
                selected_subtitle: Style::new().foreground(blue.clone()),
                unselected_subtitle: Style::new().foreground(black.clone()),
                copied_title_bar: Style::new()
                    .background(green.clone())
                    .padding(0, 1, 0, 1),
                copied_title: Style::new().foreground(bright_green.clone()),
                copied_subtitle: Style::new().foreground(green.clone()),
                deleted_title_bar: Style::new()
                    .background(red.clone())
                    .padding(0, 1, 0, 1),
                deleted_title: Style::new().foreground(bright_red.clone()),
                deleted_subtitle: Style::new().foreground(red.clone()),
            },
        },
        content: ContentStyle {
            focused: ContentBaseStyle {
                title_bar: Style::new()
                    .background(blue.clone())
                    .foreground(white.clone())
                    .padding(0, 1, 0, 1),
                line_number: Style::new().foreground(gray.clone()),
                empty_hint: Style::new().foreground(bright_gray.clone()),
                empty_hint_key: Style::new().foreground(bright_blue.clone()),
            },
            blurred: ContentBaseStyle {
                title_bar: Style::new()
                    .background(background.clone())
                    .foreground(bright_gray.clone())
                    .padding(0, 1, 0, 1),
                line_number: Style::new().foreground(black.clone()),
                empty_hint: Style::new().foreground(bright_gray.clone()),
                empty_hint_key: Style::new().foreground(bright_blue.clone()),
            },
        },
        status_bar: Style::new()
            .background(status.clone())
            .foreground(white.clone())
            .padding(0, 1, 0, 1),
        status_key: Style::new()
            .background(status)
            .foreground(bright_blue)
            .bold(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_accepts_hex_and_falls_back() {
        // valid hex and garbage both produce a usable color; the fallback
        // path must not panic
        let _ = parse_color("#AFBEE1", (0, 0, 0));
        let _ = parse_color("not-a-color", (10, 20, 30));
        let _ = parse_color("", (10, 20, 30));
    }

    #[test]
    fn test_default_styles_builds_from_default_config() {
        let styles = default_styles(&Config::default());
        let rendered = styles.snippets.focused.selected_title.render("x");
        assert!(rendered.contains('x'));
    }
}
