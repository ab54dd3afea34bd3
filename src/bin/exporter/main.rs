use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use relay_export::{
    create_live_app, ExportConfig, ExportOutcome, ExportService, GatewayAccount, LabelSize,
    ShipperConfig, ShippingExport,
};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "relay-export")]
#[command(about = "Export a shipment to Mondial Relay and fetch its label", long_about = None)]
struct Cli {
    /// JSON file holding the export record (order + shipment aggregate)
    export_file: PathBuf,

    /// Directory label PDFs are written to
    #[arg(long, env = "LABELS_PATH", default_value = "var/labels")]
    labels_path: PathBuf,

    /// Skip label generation; only mark the shipment shipped/exported
    #[arg(long, env = "LABEL_GENERATE_DISABLED", default_value = "false")]
    no_label: bool,

    /// Label format to download
    #[arg(long, env = "LABEL_SIZE", default_value = "A4")]
    label_size: LabelSize,

    /// Divisor applied to the shipment weight
    #[arg(long, env = "PRODUCT_WEIGHT")]
    product_weight: Option<u32>,

    /// Carrier merchant identifier ("Enseigne")
    #[arg(long, env = "MONDIAL_RELAY_MERCHANT_ID")]
    merchant_id: String,

    /// Carrier account private key
    #[arg(long, env = "MONDIAL_RELAY_PRIVATE_KEY")]
    private_key: String,

    /// Carrier web service endpoint
    #[arg(
        long,
        env = "MONDIAL_RELAY_ENDPOINT",
        default_value = "https://api.mondialrelay.com/Web_Services.asmx"
    )]
    endpoint: String,

    /// Shipper company printed on labels
    #[arg(long, env = "LABEL_SHIPPER_COMPANY")]
    shipper_company: String,

    #[arg(long, env = "LABEL_SHIPPER_STREET")]
    shipper_street: String,

    #[arg(long, env = "LABEL_SHIPPER_CITY")]
    shipper_city: String,

    #[arg(long, env = "LABEL_SHIPPER_POSTCODE")]
    shipper_postcode: String,

    #[arg(long, env = "LABEL_SHIPPER_COUNTRY_CODE")]
    shipper_country_code: String,

    #[arg(long, env = "LABEL_SHIPPER_PHONE_NUMBER", default_value = "")]
    shipper_phone_number: String,

    #[arg(long, env = "LABEL_SHIPPER_EMAIL", default_value = "")]
    shipper_email: String,
}

impl Cli {
    fn to_export_config(&self) -> ExportConfig {
        ExportConfig {
            label_generate: !self.no_label,
            label_size: self.label_size,
            product_weight: self.product_weight,
            shipper: ShipperConfig {
                company: self.shipper_company.clone(),
                street: self.shipper_street.clone(),
                city: self.shipper_city.clone(),
                postcode: self.shipper_postcode.clone(),
                country_code: self.shipper_country_code.clone(),
                phone_number: self.shipper_phone_number.clone(),
                email: self.shipper_email.clone(),
            },
            account: GatewayAccount {
                merchant_id: self.merchant_id.clone(),
                private_key: self.private_key.clone(),
                endpoint: self.endpoint.clone(),
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    let raw = std::fs::read_to_string(&cli.export_file)
        .with_context(|| format!("failed to read {}", cli.export_file.display()))?;
    let export: ShippingExport =
        serde_json::from_str(&raw).context("failed to parse export record")?;

    let config = cli.to_export_config();

    let services = create_live_app(cli.labels_path.clone()).context("failed to build application")?;
    services.repository.seed(export.clone()).await;

    info!(export_id = export.id, order = %export.order.number, "processing export");

    match services.export_service.process(&export, &config).await {
        Ok(ExportOutcome::Exported {
            tracking,
            label_path,
        }) => {
            match tracking {
                Some(tracking) => info!(%tracking, "shipment exported"),
                None => info!("shipment exported without label"),
            }
            if let Some(path) = label_path {
                info!(path = %path.display(), "label stored");
            }
            Ok(())
        }
        Ok(ExportOutcome::NotApplicable) => {
            info!("export belongs to another carrier, nothing to do");
            Ok(())
        }
        Err(e) => {
            error!(code = e.code(), notification = %e.notification_key(), "export failed");
            Err(e.into())
        }
    }
}
