//! Application state management for the shopfront client
//!
//! This module contains the main application state, handling keyboard input,
//! data loading, and state transitions between the storefront and product
//! detail views. Each data panel carries its own `RequestState`, so the
//! sidebar, featured list, and product page load and fail independently.

use crossterm::event::{KeyCode, KeyEvent};

use crate::cart::{clamp_quantity, Cart};
use crate::cli::StartupConfig;
use crate::config::Config;
use crate::data::{Category, Product, StoreClient};
use crate::fetch::RequestState;

/// Application state enum representing the current view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// Initial loading state while fetching storefront data
    Loading,
    /// Storefront view: category sidebar plus featured products
    Storefront,
    /// Detail view for a specific product
    ProductDetail(String),
}

/// Main application struct managing state and data
pub struct App {
    /// Current application state/view
    pub state: AppState,
    /// Featured products panel state
    pub featured: RequestState<Vec<Product>>,
    /// Category sidebar panel state
    pub categories: RequestState<Vec<Category>>,
    /// Current product detail state
    pub product: RequestState<Product>,
    /// Index of currently selected product in the featured list
    pub selected_index: usize,
    /// Index of currently selected image on the detail page
    pub selected_image: usize,
    /// Quantity chosen on the detail page, clamped to stock
    pub quantity: u32,
    /// The session cart
    pub cart: Cart,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Flag indicating a refresh has been requested
    pub refresh_requested: bool,
    /// Product id to open on the next loop iteration
    pending_open: Option<String>,
    /// Product detail page to open after the initial load (from --product)
    pending_initial_product: Option<String>,
    /// Backend API client
    client: StoreClient,
}

impl App {
    /// Creates a new App instance with default state
    pub fn new(config: &Config) -> Self {
        Self {
            state: AppState::Loading,
            featured: RequestState::Idle,
            categories: RequestState::Idle,
            product: RequestState::Idle,
            selected_index: 0,
            selected_image: 0,
            quantity: 1,
            cart: Cart::new(),
            should_quit: false,
            show_help: false,
            refresh_requested: false,
            pending_open: None,
            pending_initial_product: None,
            client: StoreClient::new(config),
        }
    }

    /// Creates a new App instance with the given startup configuration.
    ///
    /// This applies CLI arguments like --product to set the initial view.
    pub fn with_startup_config(config: &Config, startup: StartupConfig) -> Self {
        let mut app = Self::new(config);
        app.pending_initial_product = startup.initial_product;
        app
    }

    /// Creates a new App instance with a custom client (for testing)
    #[cfg(test)]
    pub fn with_client(client: StoreClient) -> Self {
        let mut app = Self::new(&Config::default());
        app.client = client;
        app
    }

    /// Returns the number of featured products currently loaded
    pub fn featured_count(&self) -> usize {
        self.featured.data().map_or(0, Vec::len)
    }

    /// Returns the currently selected featured product, if any
    pub fn selected_product(&self) -> Option<&Product> {
        self.featured.data()?.get(self.selected_index)
    }

    /// Returns the backend API client
    pub fn client(&self) -> &StoreClient {
        &self.client
    }

    /// Loads the storefront panels concurrently
    ///
    /// Featured products and categories are fetched in parallel and resolve
    /// independently, so one panel can error while the other renders data.
    /// Transitions to Storefront (or a pending --product detail page) when
    /// both have settled.
    pub async fn load_storefront(&mut self) {
        self.featured.start();
        self.categories.start();

        let (featured, categories) = futures::future::join(
            self.client.fetch_featured(),
            self.client.fetch_categories(),
        )
        .await;

        self.featured.resolve(featured);
        self.categories.resolve(categories);
        self.selected_index = 0;

        if let Some(id) = self.pending_initial_product.take() {
            self.load_product(&id).await;
        } else {
            self.state = AppState::Storefront;
        }
    }

    /// Loads a single product and opens its detail view
    pub async fn load_product(&mut self, id: &str) {
        self.state = AppState::ProductDetail(id.to_string());
        self.product.start();

        let result = self.client.fetch_product(id).await;
        self.product.resolve(result);

        self.selected_image = 0;
        self.quantity = self
            .product
            .data()
            .map_or(1, |p| clamp_quantity(1, p.stock));
    }

    /// Runs any work queued up by key handling
    ///
    /// Called from the main loop between renders; key handlers only set
    /// flags so they stay synchronous.
    pub async fn process_pending(&mut self) {
        if self.refresh_requested {
            self.refresh_requested = false;
            match self.state.clone() {
                AppState::ProductDetail(id) => self.load_product(&id).await,
                AppState::Storefront | AppState::Loading => self.load_storefront().await,
            }
        }

        if let Some(id) = self.pending_open.take() {
            self.load_product(&id).await;
        }
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - `q` or `Esc` (in Storefront): Quit the application
    /// - `Up`/`k`, `Down`/`j`: Move selection in the featured list
    /// - `Enter`: Open the selected product's detail page
    /// - `Esc` (in ProductDetail): Go back to the storefront
    /// - `h`/`Left`, `l`/`Right`: Select thumbnail image
    /// - `+`/`-`: Adjust quantity (clamped to stock)
    /// - `a`: Add the current product to the cart
    /// - `r`: Refresh the current view
    /// - `?`: Toggle help overlay
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        // Help overlay intercepts all keys when shown
        if self.show_help {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.show_help = false;
                }
                _ => {}
            }
            return;
        }

        match &self.state {
            AppState::Loading => {
                // Only quit is allowed during loading
                if key_event.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
            }
            AppState::Storefront => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.move_selection_up();
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.move_selection_down();
                }
                KeyCode::Enter => {
                    let selected = self.selected_product().map(|p| p.id.clone());
                    if let Some(id) = selected {
                        self.pending_open = Some(id);
                    }
                }
                KeyCode::Char('r') => {
                    self.refresh_requested = true;
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
            AppState::ProductDetail(_) => match key_event.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                KeyCode::Esc => {
                    self.product = RequestState::Idle;
                    self.state = AppState::Storefront;
                }
                KeyCode::Left | KeyCode::Char('h') => {
                    self.select_previous_image();
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    self.select_next_image();
                }
                KeyCode::Char('+') | KeyCode::Char('=') => {
                    self.increment_quantity();
                }
                KeyCode::Char('-') => {
                    self.decrement_quantity();
                }
                KeyCode::Char('a') => {
                    self.add_current_to_cart();
                }
                KeyCode::Char('r') => {
                    self.refresh_requested = true;
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
        }
    }

    /// Moves the featured list selection up, stopping at the first item
    fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Moves the featured list selection down, stopping at the last item
    fn move_selection_down(&mut self) {
        let count = self.featured_count();
        if count > 0 && self.selected_index < count - 1 {
            self.selected_index += 1;
        }
    }

    /// Selects the previous thumbnail image
    fn select_previous_image(&mut self) {
        self.selected_image = self.selected_image.saturating_sub(1);
    }

    /// Selects the next thumbnail image
    fn select_next_image(&mut self) {
        let count = self.product.data().map_or(0, |p| p.images.len());
        if count > 0 && self.selected_image < count - 1 {
            self.selected_image += 1;
        }
    }

    /// Increases the chosen quantity, clamped to the product's stock
    fn increment_quantity(&mut self) {
        if let Some(product) = self.product.data() {
            self.quantity = clamp_quantity(self.quantity + 1, product.stock);
        }
    }

    /// Decreases the chosen quantity, never below 1 (or 0 for empty stock)
    fn decrement_quantity(&mut self) {
        if let Some(product) = self.product.data() {
            self.quantity = clamp_quantity(self.quantity.saturating_sub(1), product.stock);
        }
    }

    /// Adds the currently shown product to the cart at the chosen quantity
    fn add_current_to_cart(&mut self) {
        if let Some(product) = self.product.data().cloned() {
            self.cart.add(&product, self.quantity);
        }
    }
}
