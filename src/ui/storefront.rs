//! Storefront screen rendering
//!
//! Renders the main storefront view: a category sidebar on the left and the
//! featured products list on the right. Each panel projects its own
//! `RequestState`, so one can show an error while the other shows data.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::{Category, Product};
use crate::fetch::RequestState;

/// Number of placeholder rows shown while the featured list loads
const SKELETON_ROWS: usize = 3;

/// Renders the storefront view
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(20)])
        .split(chunks[1]);

    render_sidebar(frame, body[0], &app.categories);
    render_featured(frame, body[1], &app.featured, app.selected_index);
    render_footer(frame, chunks[2], app);
}

/// Renders the title bar
fn render_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " Shopfront ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("- featured products", Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(title, area);
}

/// Renders the category sidebar panel
fn render_sidebar(frame: &mut Frame, area: Rect, categories: &RequestState<Vec<Category>>) {
    let lines = match categories {
        RequestState::Idle | RequestState::Loading => vec![Line::from(Span::styled(
            "Loading categories...",
            Style::default().fg(Color::DarkGray),
        ))],
        RequestState::Error(message) => vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        ))],
        RequestState::Success(categories) => categories
            .iter()
            .map(|category| {
                Line::from(vec![
                    Span::styled("• ", Style::default().fg(Color::Cyan)),
                    Span::raw(category.name.clone()),
                ])
            })
            .collect(),
    };

    let block = Block::default().title(" Category ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Renders the featured products panel
fn render_featured(
    frame: &mut Frame,
    area: Rect,
    featured: &RequestState<Vec<Product>>,
    selected_index: usize,
) {
    let lines = match featured {
        RequestState::Idle | RequestState::Loading => skeleton_lines(),
        RequestState::Error(message) => vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        ))],
        RequestState::Success(products) => products
            .iter()
            .enumerate()
            .map(|(i, product)| product_line(product, i == selected_index))
            .collect(),
    };

    let block = Block::default()
        .title(" Featured Products ")
        .borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Placeholder rows shown while the product list is in flight
fn skeleton_lines() -> Vec<Line<'static>> {
    (0..SKELETON_ROWS)
        .map(|_| {
            Line::from(Span::styled(
                "  ▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒      ▒▒▒▒▒▒",
                Style::default().fg(Color::DarkGray),
            ))
        })
        .collect()
}

/// Builds one featured list row
fn product_line(product: &Product, selected: bool) -> Line<'static> {
    let marker = if selected { "▶ " } else { "  " };
    let title_style = if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let mut spans = vec![
        Span::styled(marker.to_string(), Style::default().fg(Color::Yellow)),
        Span::styled(format!("{:<34}", product.title), title_style),
        Span::styled(
            format!("${:>8.2}  ", product.price),
            Style::default().fg(Color::Green),
        ),
    ];
    spans.push(stock_span(product.stock));

    Line::from(spans)
}

/// Stock badge for a product row
fn stock_span(stock: u32) -> Span<'static> {
    if stock == 0 {
        Span::styled("out of stock", Style::default().fg(Color::Red))
    } else {
        Span::styled(
            format!("{} in stock", stock),
            Style::default().fg(Color::DarkGray),
        )
    }
}

/// Renders the key hints and cart summary footer
fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let cart_summary = if app.cart.is_empty() {
        "Cart: empty".to_string()
    } else {
        format!(
            "Cart: {} items (${:.2})",
            app.cart.total_items(),
            app.cart.total_price()
        )
    };

    let footer = Paragraph::new(Line::from(vec![
        Span::styled(
            " ↑/↓ select  Enter open  r refresh  ? help  q quit  ",
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(cart_summary, Style::default().fg(Color::Cyan)),
    ]));

    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::{backend::TestBackend, Terminal};

    fn product(id: &str, title: &str, stock: u32) -> Product {
        Product {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            price: 19.99,
            images: vec![],
            stock,
        }
    }

    fn render_to_string(app: &App) -> String {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_loading_panels() {
        let app = App::new(&Config::default());

        let content = render_to_string(&app);

        assert!(content.contains("Loading categories"));
        assert!(content.contains("▒▒▒"), "Featured panel shows skeletons");
    }

    #[test]
    fn test_renders_loaded_panels() {
        let mut app = App::new(&Config::default());
        app.categories = RequestState::Success(vec![Category {
            id: "c1".to_string(),
            name: "Electronics".to_string(),
            image: "electronics.png".to_string(),
        }]);
        app.featured = RequestState::Success(vec![
            product("p1", "Wireless Headphones", 12),
            product("p2", "Desk Lamp", 0),
        ]);

        let content = render_to_string(&app);

        assert!(content.contains("Electronics"));
        assert!(content.contains("Wireless Headphones"));
        assert!(content.contains("12 in stock"));
        assert!(content.contains("out of stock"));
        assert!(content.contains("Cart: empty"));
    }

    #[test]
    fn test_renders_panel_errors_independently() {
        let mut app = App::new(&Config::default());
        app.categories = RequestState::Error("Something went wrong".to_string());
        app.featured = RequestState::Success(vec![product("p1", "Desk Lamp", 3)]);

        let content = render_to_string(&app);

        assert!(content.contains("Something went wrong"));
        assert!(content.contains("Desk Lamp"));
    }

    #[test]
    fn test_selection_marker_follows_index() {
        let mut app = App::new(&Config::default());
        app.featured = RequestState::Success(vec![
            product("p1", "First", 1),
            product("p2", "Second", 1),
        ]);
        app.selected_index = 1;

        let content = render_to_string(&app);

        let marker_pos = content.find('▶').expect("Selection marker should render");
        let second_pos = content.find("Second").expect("Second product should render");
        assert!(
            marker_pos < second_pos && second_pos - marker_pos < 10,
            "Marker should sit next to the selected row"
        );
    }
}
