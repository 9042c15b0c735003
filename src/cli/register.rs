//! Register command handler
//!
//! Builds a registration draft from flags and drives it through the
//! wizard's real transitions: step validations, confirmation, submit.
//! Validation messages come from the wizard unchanged.

use crate::config::Config;
use crate::constants::options;
use crate::error::Result;
use crate::store::StoreClient;
use crate::wizard::merchant::MerchantForm;
use crate::wizard::shop::ShopForm;
use crate::wizard::{Choice, RegistrationForm, UserId, Wizard, WizardState};
use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum RegisterCommand {
    /// Register a physical shop
    Shop(ShopArgs),

    /// Register an online merchant
    Merchant(MerchantArgs),
}

/// Shop registration arguments
#[derive(Args)]
pub struct ShopArgs {
    /// Shop name
    #[arg(long)]
    pub name: Option<String>,

    /// Street address
    #[arg(long)]
    pub address: Option<String>,

    /// Category (becomes the listing tag)
    #[arg(long)]
    pub category: Option<String>,

    /// Latitude of the shop
    #[arg(long)]
    pub lat: Option<f64>,

    /// Longitude of the shop
    #[arg(long)]
    pub lng: Option<f64>,

    /// Canonical JPYC use case (repeatable)
    #[arg(long = "use-case")]
    pub use_cases: Vec<String>,

    /// Free-text JPYC use case
    #[arg(long)]
    pub use_case_other: Option<String>,

    /// Supported network (repeatable)
    #[arg(long = "network")]
    pub networks: Vec<String>,

    /// Free-text network
    #[arg(long)]
    pub network_other: Option<String>,

    /// Payment method
    #[arg(long)]
    pub payment: Option<String>,

    /// Shop website
    #[arg(long)]
    pub url: Option<String>,

    /// Confirm the submission
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// List canonical options and exit
    #[arg(long)]
    pub list_options: bool,
}

/// Merchant registration arguments
#[derive(Args)]
pub struct MerchantArgs {
    /// Service name
    #[arg(long)]
    pub name: Option<String>,

    /// Service URL
    #[arg(long)]
    pub url: Option<String>,

    /// Service description
    #[arg(long)]
    pub description: Option<String>,

    /// Canonical service type
    #[arg(long, conflicts_with = "service_type_other")]
    pub service_type: Option<String>,

    /// Free-text service type
    #[arg(long)]
    pub service_type_other: Option<String>,

    /// Canonical JPYC use case
    #[arg(long, conflicts_with = "use_case_other")]
    pub use_case: Option<String>,

    /// Free-text JPYC use case
    #[arg(long)]
    pub use_case_other: Option<String>,

    /// Supported platform (repeatable)
    #[arg(long = "platform")]
    pub platforms: Vec<String>,

    /// Free-text platform
    #[arg(long)]
    pub platform_other: Option<String>,

    /// Country of operation
    #[arg(long)]
    pub country: Option<String>,

    /// Listing tag (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Confirm the submission
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// List canonical options and exit
    #[arg(long)]
    pub list_options: bool,
}

/// Run the register command
pub async fn run(command: RegisterCommand) -> Result<()> {
    match command {
        RegisterCommand::Shop(args) => run_shop(args).await,
        RegisterCommand::Merchant(args) => run_merchant(args).await,
    }
}

async fn run_shop(args: ShopArgs) -> Result<()> {
    if args.list_options {
        print_shop_options();
        return Ok(());
    }

    let config = Config::load()?;
    let store = super::require_store(&config)?;
    let identity = config.identity();

    let mut wizard: Wizard<ShopForm> = Wizard::new();
    {
        let form = wizard.form_mut();
        form.name = args.name.unwrap_or_default();
        form.address = args.address.unwrap_or_default();
        form.category = args.category;
        if let Some(lat) = args.lat {
            form.lat = lat;
        }
        if let Some(lng) = args.lng {
            form.lng = lng;
        }
        form.jpyc_use_cases = args.use_cases.into_iter().map(Choice::Selected).collect();
        if let Some(text) = args.use_case_other {
            form.jpyc_use_cases.push(Choice::Custom(text));
        }
        form.networks = args.networks.into_iter().map(Choice::Selected).collect();
        if let Some(text) = args.network_other {
            form.networks.push(Choice::Custom(text));
        }
        form.payment_method = args.payment;
        form.url = args.url.unwrap_or_default();
    }

    drive(wizard, &store, identity, args.yes).await
}

async fn run_merchant(args: MerchantArgs) -> Result<()> {
    if args.list_options {
        print_merchant_options();
        return Ok(());
    }

    let config = Config::load()?;
    let store = super::require_store(&config)?;
    let identity = config.identity();

    let mut wizard: Wizard<MerchantForm> = Wizard::new();
    {
        let form = wizard.form_mut();
        form.name = args.name.unwrap_or_default();
        form.url = args.url.unwrap_or_default();
        form.description = args.description.unwrap_or_default();
        form.service_type = match (args.service_type, args.service_type_other) {
            (_, Some(text)) => Some(Choice::Custom(text)),
            (Some(value), None) => Some(Choice::Selected(value)),
            (None, None) => None,
        };
        form.jpyc_use_case = match (args.use_case, args.use_case_other) {
            (_, Some(text)) => Some(Choice::Custom(text)),
            (Some(value), None) => Some(Choice::Selected(value)),
            (None, None) => None,
        };
        form.platforms = args.platforms.into_iter().map(Choice::Selected).collect();
        if let Some(text) = args.platform_other {
            form.platforms.push(Choice::Custom(text));
        }
        form.country = args.country.unwrap_or_default();
        for tag in args.tags {
            form.tag_buffer = tag;
            form.add_tag();
        }
        form.tag_buffer.clear();
    }

    drive(wizard, &store, identity, args.yes).await
}

/// Walk a prepared wizard through its transitions and report the outcome
async fn drive<F: RegistrationForm>(
    mut wizard: Wizard<F>,
    store: &StoreClient,
    identity: Option<UserId>,
    confirmed: bool,
) -> Result<()> {
    while wizard.state() != WizardState::Confirm {
        if !wizard.advance() {
            eprintln!("Error: {}", wizard.error().unwrap_or("invalid input"));
            std::process::exit(1);
        }
    }

    wizard.set_confirmed(confirmed);

    if wizard.submit(store, identity.as_ref()).await {
        println!("申請を受け付けました。承認されると掲載されます。");
        Ok(())
    } else {
        eprintln!("Error: {}", wizard.error().unwrap_or("submission failed"));
        std::process::exit(1);
    }
}

/// Print the canonical option lists for shop registration
fn print_shop_options() {
    println!("categories:");
    for value in options::SHOP_CATEGORIES {
        println!("  {}", value);
    }
    println!("use cases:");
    for value in options::SHOP_USE_CASES {
        println!("  {}", value);
    }
    println!("networks:");
    for value in options::NETWORKS {
        println!("  {}", value);
    }
    println!("payment methods:");
    for value in options::PAYMENT_METHODS {
        println!("  {}", value);
    }
}

/// Print the canonical option lists for merchant registration
fn print_merchant_options() {
    println!("service types:");
    for value in options::MERCHANT_SERVICE_TYPES {
        println!("  {}", value);
    }
    println!("use cases:");
    for value in options::MERCHANT_USE_CASES {
        println!("  {}", value);
    }
    println!("platforms:");
    for value in options::PLATFORMS {
        println!("  {}", value);
    }
}
