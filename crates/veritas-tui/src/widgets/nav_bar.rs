//! Top navigation bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, styles};

const LINKS: [&str; 3] = ["How it Works", "API", "About"];

/// Brand on the left, static links on the right
pub struct NavBar {
    icons: IconSet,
}

impl NavBar {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }
}

impl Widget for NavBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let brand = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.shield(), styles::accent_bold()),
            Span::raw(" "),
            Span::styled("Veritas", styles::text_bright_bold()),
            Span::styled(" AI", styles::accent_bold()),
        ]);
        let brand_width = brand.width() as u16;
        Paragraph::new(brand).render(inner, buf);

        let mut spans = Vec::with_capacity(LINKS.len() * 2);
        for link in LINKS {
            spans.push(Span::styled(link, styles::text_secondary()));
            spans.push(Span::raw("   "));
        }
        let links = Line::from(spans);
        let links_width = links.width() as u16;

        // Links only when they fit beside the brand
        if brand_width + links_width < inner.width {
            let links_area = Rect {
                x: inner.right() - links_width,
                width: links_width,
                ..inner
            };
            Paragraph::new(links).render(links_area, buf);
        }
    }
}
