//! Product detail screen rendering
//!
//! Renders a single product page: thumbnail strip with the selected image
//! highlighted, the resolved image URL, title, description, price, stock,
//! and the quantity / add-to-cart controls.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::data::Product;
use crate::fetch::RequestState;

/// Renders the product detail view
pub fn render(frame: &mut Frame, app: &App, product_id: &str) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], product_id);

    match &app.product {
        RequestState::Idle | RequestState::Loading => render_loading(frame, chunks[1]),
        RequestState::Error(message) => render_error(frame, chunks[1], message),
        RequestState::Success(product) => render_product(frame, chunks[1], app, product),
    }

    render_footer(frame, chunks[2], app);
}

/// Renders the title bar
fn render_header(frame: &mut Frame, area: Rect, product_id: &str) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " Product ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(product_id.to_string(), Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(title, area);
}

/// Renders the in-flight placeholder
fn render_loading(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(Span::styled(
        "Loading product...",
        Style::default().fg(Color::Cyan),
    ));
    frame.render_widget(paragraph, area);
}

/// Renders a fetch failure
fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(Span::styled(
        message.to_string(),
        Style::default().fg(Color::Red),
    ));
    frame.render_widget(paragraph, area);
}

/// Renders the loaded product page
fn render_product(frame: &mut Frame, area: Rect, app: &App, product: &Product) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Thumbnails + display URL
            Constraint::Min(4),    // Details
            Constraint::Length(2), // Quantity controls
        ])
        .split(area);

    render_images(frame, chunks[0], app, product);
    render_details(frame, chunks[1], product);
    render_quantity(frame, chunks[2], app, product);
}

/// Renders the thumbnail strip and the selected image's resolved URL
fn render_images(frame: &mut Frame, area: Rect, app: &App, product: &Product) {
    let mut thumbnails = vec![Span::raw("  ")];
    for (i, image) in product.images.iter().enumerate() {
        let style = if i == app.selected_image {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        thumbnails.push(Span::styled(format!("[{}] ", image), style));
    }

    let display = match product.image_at(app.selected_image) {
        Some(image) => Line::from(vec![
            Span::styled("  view: ", Style::default().fg(Color::DarkGray)),
            Span::raw(app.client().product_image_url(image)),
        ]),
        None => Line::from(Span::styled(
            "  no images",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let lines = vec![Line::from(thumbnails), display];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Renders title, description, price, and stock
fn render_details(frame: &mut Frame, area: Rect, product: &Product) {
    let stock_line = if product.stock == 0 {
        Span::styled("Out of stock", Style::default().fg(Color::Red))
    } else {
        Span::styled(
            format!("{} in stock", product.stock),
            Style::default().fg(Color::Green),
        )
    };

    let lines = vec![
        Line::from(Span::styled(
            product.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::raw(product.description.clone())),
        Line::from(""),
        Line::from(Span::styled(
            format!("${:.2}", product.price),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(stock_line),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

/// Renders the quantity selector and add-to-cart hint
fn render_quantity(frame: &mut Frame, area: Rect, app: &App, product: &Product) {
    let lines = if product.stock == 0 {
        vec![Line::from(Span::styled(
            "Unavailable",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        vec![Line::from(vec![
            Span::raw("Quantity: "),
            Span::styled("- ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{}", app.quantity),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(" +", Style::default().fg(Color::Yellow)),
            Span::styled("    press a to add to cart", Style::default().fg(Color::DarkGray)),
        ])]
    };

    frame.render_widget(Paragraph::new(lines), area);
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
            " ←/→ image  +/- quantity  a add  Esc back  q quit  ",
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(cart_summary, Style::default().fg(Color::Cyan)),
    ]));

    frame.render_widget(footer, area);
}
