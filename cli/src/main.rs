//! Storefront CLI — a terminal front door for the session-gated catalog.
//!
//! SYSTEM CONTEXT
//! ==============
//! The binary plays the role the browser plays for the hosted app: it mounts
//! the application shell once, lets the session probe settle, then navigates
//! paths through the route gate. Protected views render with the identity
//! attached; a missing identity follows the redirect instead, the way a
//! browser follows `Location`.

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use client::api::ApiClient;
use client::api::auth::{AuthApi, SignInRequest, SignUpRequest};
use client::api::products::Product;
use client::config::ApiConfig;
use client::session::SessionContext;
use client::shell::AppShell;
use gate::{Identity, Outcome, Route};

/// Maximum redirect hops `browse` follows before giving up.
const MAX_REDIRECTS: usize = 8;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("api request failed: {0}")]
    Api(#[from] client::api::ApiError),
    #[error("redirect chain exceeded {MAX_REDIRECTS} hops at {0}")]
    RedirectLoop(String),
}

#[derive(Parser, Debug)]
#[command(name = "storefront", about = "Storefront session and catalog CLI")]
struct Cli {
    /// Base URL of the storefront API.
    #[arg(long, env = "STOREFRONT_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    /// Existing session token to resume, if any.
    #[arg(long, env = "STOREFRONT_SESSION_TOKEN")]
    session_token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a path through the route gate and render where you land.
    Browse { path: String },
    /// Print the identity the current session resolves to.
    Whoami,
    /// Create an account and print its session token.
    SignUp(SignUpArgs),
    /// Sign in to an existing account and print its session token.
    SignIn(SignInArgs),
    /// Invalidate the current session.
    SignOut,
    /// Catalog shortcuts that skip the gate.
    Products(ProductsCommand),
}

#[derive(Args, Debug)]
struct SignUpArgs {
    #[arg(long)]
    username: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
}

#[derive(Args, Debug)]
struct SignInArgs {
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
}

#[derive(Args, Debug)]
struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProductsSubcommand {
    List,
    Show { id: String },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let session = Arc::new(match cli.session_token.as_deref() {
        Some(token) => SessionContext::with_token(token),
        None => SessionContext::new(),
    });
    let api = ApiClient::new(ApiConfig::new(&cli.base_url), Arc::clone(&session));
    let auth: Arc<dyn AuthApi> = Arc::new(api.clone());

    let mut shell = AppShell::new(auth, Arc::clone(&session));
    shell.mount();
    shell.wait_ready().await;

    match cli.command {
        Command::Browse { path } => browse(&shell, &api, &path).await?,
        Command::Whoami => whoami(&shell.identity()),
        Command::SignUp(args) => {
            let req = SignUpRequest {
                username: args.username,
                email: args.email,
                password: args.password,
            };
            let user = shell.sign_up(&req).await?;
            println!("signed up as {} <{}>", user.username, user.email);
            print_token_hint(&session);
        }
        Command::SignIn(args) => {
            let req = SignInRequest { email: args.email, password: args.password };
            let user = shell.sign_in(&req).await?;
            println!("signed in as {} <{}>", user.username, user.email);
            print_token_hint(&session);
        }
        Command::SignOut => {
            shell.sign_out().await?;
            println!("signed out; unset STOREFRONT_SESSION_TOKEN to forget the old token");
        }
        Command::Products(products) => match products.command {
            ProductsSubcommand::List => {
                print_listing(&api.list_products().await?);
            }
            ProductsSubcommand::Show { id } => {
                print_product(&api.get_product(&id).await?);
            }
        },
    }

    Ok(())
}

fn print_token_hint(session: &SessionContext) {
    if let Some(token) = session.token() {
        println!("export STOREFRONT_SESSION_TOKEN={token}");
    }
}

// =============================================================================
// BROWSE
// =============================================================================

/// Navigate `path` through the gate, following redirects like a browser
/// follows `Location`, and render the view that finally wins.
async fn browse(shell: &AppShell, api: &ApiClient, path: &str) -> Result<(), CliError> {
    let mut current = path.to_owned();

    for _ in 0..MAX_REDIRECTS {
        match shell.navigate(&current) {
            Outcome::Render { route, identity } => {
                render(api, &route, &identity).await?;
                return Ok(());
            }
            Outcome::Redirect { to } => {
                println!("-> redirected to {to}");
                current = to.to_owned();
            }
            Outcome::Pending => {
                // Unreachable after wait_ready; keep the loader honest anyway.
                println!("resolving session...");
                shell.wait_ready().await;
            }
            Outcome::NotFound => {
                println!("404 — no view at {current}");
                return Ok(());
            }
        }
    }

    Err(CliError::RedirectLoop(current))
}

async fn render(api: &ApiClient, route: &Route, identity: &Identity) -> Result<(), CliError> {
    match route {
        Route::Home => {
            println!("storefront");
            match identity.user() {
                Some(user) => println!(
                    "signed in as {} — /add-product to sell, /sign-out to leave",
                    user.username
                ),
                None => println!("browse /products; /sign-in to manage the catalog"),
            }
        }
        Route::SignUp => println!("sign-up form (use `storefront sign-up`)"),
        Route::SignIn => println!("sign-in form (use `storefront sign-in`)"),
        Route::SignOut => println!("sign-out control (use `storefront sign-out`)"),
        Route::Products => print_listing(&api.list_products().await?),
        Route::ProductDetail { id } => print_product(&api.get_product(id).await?),
        Route::ProductCreate => {
            if let Some(user) = identity.user() {
                println!("new product form — listing as {}", user.username);
            }
        }
        Route::ProductEdit { id } => {
            let product = api.get_product(id).await?;
            if let Some(user) = identity.user() {
                println!("editing \"{}\" as {}", product.name, user.username);
            }
            print_product(&product);
        }
    }
    Ok(())
}

// =============================================================================
// RENDER HELPERS
// =============================================================================

fn whoami(identity: &Identity) {
    match identity {
        Identity::Authenticated(user) => {
            println!("{} <{}> (id {})", user.username, user.email, user.id);
        }
        Identity::Anonymous => println!("anonymous"),
        Identity::Pending => println!("resolving session..."),
    }
}

fn print_listing(products: &[Product]) {
    if products.is_empty() {
        println!("no products yet");
        return;
    }
    for product in products {
        println!("{}  {:>8.2}  {}", product.id, product.price, product.name);
    }
}

fn print_product(product: &Product) {
    println!("{} — {:.2}", product.name, product.price);
    println!("{}", product.description);
    if let Some(image_url) = &product.image_url {
        println!("image: {image_url}");
    }
    println!("id: {}", product.id);
}
