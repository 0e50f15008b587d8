// Looks up a Pokémon and prints a short summary.
//
//     cargo run --example lookup -- pikachu

use pokedex_client::{Client, ClientConfig, Language, SpriteKind, StatKind};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_client=debug,lookup=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let name = std::env::args().nth(1).unwrap_or_else(|| "bulbasaur".to_string());

    let config = match ClientConfig::bundled() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    let client = match Client::new(config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to create client: {}", e);
            std::process::exit(1);
        }
    };

    let pokemon = match client.get_pokemon(&name).await {
        Ok(pokemon) => pokemon,
        Err(e) => {
            tracing::error!("Failed to fetch {}: {}", name, e);
            std::process::exit(1);
        }
    };

    println!("#{} {}", pokemon.id(), pokemon.name());
    println!("types: {:?}", pokemon.types().to_vec());
    for kind in StatKind::ALL {
        if let Some(stat) = pokemon.stat(*kind) {
            println!("{:>16}: {}", kind.enum_name(), stat.base_stat());
        }
    }
    if let Some(url) = pokemon.sprite(SpriteKind::FrontDefault).and_then(|s| s.url()) {
        println!("sprite: {url}");
    }

    match client.get_species_of(&pokemon).await {
        Ok(species) => {
            if let Some(genus) = species.genera().get(Language::English) {
                println!("the {}", genus.name());
            }
            if let Some(flavor) = species.flavors().get(Language::English) {
                println!("{}", flavor.text().replace(['\n', '\u{c}'], " "));
            }
        }
        Err(e) => tracing::warn!("No species data for {}: {}", name, e),
    }
}
