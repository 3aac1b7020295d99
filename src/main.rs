use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use subpanel::config::Config;
use subpanel::logging::init_tracing;
use subpanel::repository::Repository;
use subpanel::session::{FileStore, Session};
use subpanel::ui::controller::{LogImporter, Screen, ScreenController, ScreenEnv};
use subpanel::ui::screens::checkout::{CheckoutIntent, CheckoutScreen};
use subpanel::ui::screens::dashboard::DashboardScreen;
use subpanel::ui::screens::forgot_password::{ForgotPasswordIntent, ForgotPasswordScreen};
use subpanel::ui::screens::login::{LoginIntent, LoginScreen};
use subpanel::ui::screens::purchase::PurchaseScreen;
use subpanel::ui::screens::register::{RegisterIntent, RegisterScreen};
use subpanel::ui::screens::user_info::UserInfoScreen;

#[derive(Parser, Debug)]
#[command(name = "subpanel", version, about = "Headless subscription panel client")]
struct Cli {
    /// Config file (default: <config dir>/subpanel/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Defaults to --password
        #[arg(long)]
        confirm_password: Option<String>,
        #[arg(long)]
        invite_code: Option<String>,
        #[arg(long)]
        email_code: Option<String>,
    },
    /// Email a verification code
    SendCode {
        #[arg(long)]
        email: String,
    },
    /// Set a new password using an emailed code
    ResetPassword {
        #[arg(long)]
        email: String,
        #[arg(long)]
        email_code: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Usage, plan and servers
    Dashboard,
    /// List purchasable plans
    Plans,
    /// Order a plan and pay for it
    Checkout {
        #[arg(long)]
        plan_id: i64,
        /// Period key, e.g. month_price
        #[arg(long)]
        period: String,
        /// Payment method id
        #[arg(long)]
        method: i64,
        #[arg(long)]
        coupon: Option<String>,
    },
    /// Account details
    UserInfo,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load config")?;
    init_tracing(&config.logging.filter);

    let store_path = config
        .session
        .path
        .clone()
        .unwrap_or_else(FileStore::default_path);
    let store = FileStore::open(store_path).context("Failed to open session store")?;
    let session = Session::new(Arc::new(store));
    let repository =
        Repository::from_config(&config, session).context("Failed to build HTTP client")?;
    let env = ScreenEnv::new(repository.clone(), Arc::new(LogImporter))
        .with_cooldown(config.ui.email_code_cooldown_seconds);

    match cli.command {
        Command::Login { email, password } => {
            run_screen(LoginScreen::new(), env, Some(LoginIntent::Login { email, password })).await
        }
        Command::Register {
            email,
            password,
            confirm_password,
            invite_code,
            email_code,
        } => {
            let confirm_password = confirm_password.unwrap_or_else(|| password.clone());
            let request = RegisterIntent::Register {
                email,
                password,
                confirm_password,
                invite_code,
                email_code,
            };
            run_screen(RegisterScreen::new(), env, Some(request)).await
        }
        Command::SendCode { email } => {
            let request = ForgotPasswordIntent::SendEmailCode { email };
            run_screen(ForgotPasswordScreen::new(), env, Some(request)).await
        }
        Command::ResetPassword {
            email,
            email_code,
            password,
        } => {
            let request = ForgotPasswordIntent::ResetPassword {
                email,
                email_code,
                confirm_password: password.clone(),
                password,
            };
            run_screen(ForgotPasswordScreen::new(), env, Some(request)).await
        }
        Command::Logout => {
            repository.logout();
            println!("Logged out");
            Ok(())
        }
        Command::Dashboard => run_screen(DashboardScreen::new(), env, None).await,
        Command::Plans => run_screen(PurchaseScreen::new(), env, None).await,
        Command::Checkout {
            plan_id,
            period,
            method,
            coupon,
        } => {
            let request = CheckoutIntent::Checkout {
                period,
                coupon_code: coupon,
                payment_method_id: method,
            };
            run_screen(CheckoutScreen::new(plan_id, ""), env, Some(request)).await
        }
        Command::UserInfo => run_screen(UserInfoScreen::new(), env, None).await,
    }
}

/// Open a screen, submit at most one request, wait for it to be handled and
/// print what the screen ended up showing.
async fn run_screen<S: Screen>(
    screen: S,
    env: ScreenEnv,
    request: Option<S::Request>,
) -> anyhow::Result<()> {
    let mut handle = ScreenController::spawn(screen, env);
    if let Some(request) = request {
        handle.send(request);
    }

    let interrupted = tokio::select! {
        _ = handle.settle() => false,
        _ = tokio::signal::ctrl_c() => true,
    };
    if interrupted {
        tracing::warn!("Interrupted, tearing screen down");
        handle.teardown().await;
        return Ok(());
    }

    println!("{:#?}", handle.state());
    for effect in handle.drain_effects() {
        println!("effect: {:?}", effect);
    }
    handle.teardown().await;
    Ok(())
}
