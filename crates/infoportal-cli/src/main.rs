use clap::{Parser, Subcommand};
use infoportal_core::article::ArticleDraft;
use infoportal_kv::KvClient;
use infoportal_store::{AdConfigRepository, ArticleRepository};

#[derive(Debug, Parser)]
#[command(name = "infoportal-cli")]
#[command(about = "InfoPortal operator command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Inspect or seed the article collection.
    Articles {
        #[command(subcommand)]
        command: ArticlesCommand,
    },
    /// Inspect the ad configuration.
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Debug, Subcommand)]
enum ArticlesCommand {
    /// Print one line per stored article.
    List,
    /// Write the default welcome article into an empty store.
    Seed,
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    /// Print the ad configuration as pretty JSON.
    Show {
        /// Print the stored document verbatim instead of the effective
        /// (default-merged) configuration.
        #[arg(long)]
        raw: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = infoportal_core::load_app_config()?;
    let kv = KvClient::with_base_url(
        &config.kv_account_id,
        &config.kv_namespace_id,
        &config.kv_api_token,
        config.kv_timeout_secs,
        &config.kv_base_url,
    )?;

    match cli.command {
        Commands::Articles { command } => {
            let repo = ArticleRepository::new(kv);
            match command {
                ArticlesCommand::List => list_articles(&repo).await,
                ArticlesCommand::Seed => seed_articles(&repo).await,
            }
        }
        Commands::Config { command } => {
            let repo = AdConfigRepository::new(kv);
            match command {
                ConfigCommand::Show { raw } => show_config(&repo, raw).await,
            }
        }
    }
}

async fn list_articles(repo: &ArticleRepository) -> anyhow::Result<()> {
    let articles = repo.list().await?;
    if articles.is_empty() {
        println!("no articles stored");
        return Ok(());
    }
    println!("{:>14}  {:>7}  {:<18}  title", "id", "views", "category");
    for article in articles {
        println!(
            "{:>14}  {:>7}  {:<18}  {}",
            article.id, article.views, article.category, article.title
        );
    }
    Ok(())
}

async fn seed_articles(repo: &ArticleRepository) -> anyhow::Result<()> {
    let existing = repo.list().await?;
    if !existing.is_empty() {
        anyhow::bail!(
            "refusing to seed: the store already holds {} article(s)",
            existing.len()
        );
    }
    let article = repo.create(seed_draft()).await?;
    println!("seeded article {} ({})", article.id, article.title);
    Ok(())
}

/// The welcome article the portal has always shipped with.
fn seed_draft() -> ArticleDraft {
    ArticleDraft {
        title: "10 Tips Menghasilkan Uang dari Internet untuk Pemula".to_string(),
        category: "Bisnis Online".to_string(),
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&h=400&fit=crop"
            .to_string(),
        excerpt:
            "Panduan lengkap untuk memulai bisnis online dan mendapatkan penghasilan dari rumah..."
                .to_string(),
        content: "Di era digital seperti sekarang, peluang untuk menghasilkan uang secara online \
                  semakin terbuka lebar.\n\nBeberapa cara yang bisa Anda coba:\n1. Affiliate \
                  Marketing\n2. Dropshipping\n3. Content Creation\n4. Freelancing\n5. Online \
                  Course\n\nKunci kesuksesan adalah konsistensi dan terus belajar."
            .to_string(),
        read_time: "5 min".to_string(),
        ad_config: None,
    }
}

async fn show_config(repo: &AdConfigRepository, raw: bool) -> anyhow::Result<()> {
    let rendered = if raw {
        serde_json::to_string_pretty(&repo.load_raw().await?)?
    } else {
        serde_json::to_string_pretty(&repo.load().await?)?
    };
    println!("{rendered}");
    Ok(())
}
