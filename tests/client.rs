// End-to-end tests against a local server impersonating the API.

use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use pokedex_client::{
    Client, ClientConfig, EncounterMethod, Error, Generation, Language, MoveLearnMethod, Pokedex,
    PokemonType, SpriteKind, StatKind, Version, VersionGroup, blocking,
};
use serde_json::{Value, json};

#[derive(Clone)]
enum Canned {
    Json(Value),
    Raw(StatusCode, &'static str),
}

type Routes = Arc<HashMap<String, Canned>>;

async fn serve_canned(State(routes): State<Routes>, uri: Uri) -> Response {
    match routes.get(uri.path()) {
        Some(Canned::Json(value)) => Json(value.clone()).into_response(),
        Some(Canned::Raw(status, body)) => (*status, *body).into_response(),
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

fn fixture(name: &str) -> Value {
    let path = format!("{}/tests/fixtures/{}.json", env!("CARGO_MANIFEST_DIR"), name);
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn routes() -> HashMap<String, Canned> {
    let bulbasaur = fixture("pokemon-bulbasaur");
    let body_slam = fixture("move-body-slam");
    let levitate = fixture("ability-levitate");
    let pikachu = fixture("pokemon-species-pikachu");

    let mut broken = bulbasaur.clone();
    broken.as_object_mut().unwrap().remove("stats");
    let mut cosmic = bulbasaur.clone();
    cosmic["name"] = json!("cosmic-saur");
    cosmic["types"][1]["type"]["name"] = json!("cosmic");

    let mut routes = HashMap::new();
    let mut add = |path: &str, canned: Canned| {
        routes.insert(format!("/api/v2/{path}/"), canned);
    };
    add("pokemon/bulbasaur", Canned::Json(bulbasaur.clone()));
    add("pokemon/1", Canned::Json(bulbasaur));
    add("pokemon/broken-saur", Canned::Json(broken));
    add("pokemon/cosmic-saur", Canned::Json(cosmic));
    add("pokemon/garbled", Canned::Raw(StatusCode::OK, "<html>not json</html>"));
    add("pokemon/teapot", Canned::Raw(StatusCode::INTERNAL_SERVER_ERROR, "oops"));
    add("pokemon/starly/encounters", Canned::Json(fixture("pokemon-starly-encounters")));
    add("pokemon/398/encounters", Canned::Json(fixture("pokemon-starly-encounters")));
    add("move/body-slam", Canned::Json(body_slam.clone()));
    add("move/34", Canned::Json(body_slam));
    add("ability/levitate", Canned::Json(levitate.clone()));
    add("ability/26", Canned::Json(levitate));
    add("pokemon-species/pikachu", Canned::Json(pikachu.clone()));
    add("pokemon-species/25", Canned::Json(pikachu));
    add("version-group/diamond-pearl", Canned::Json(fixture("version-group-diamond-pearl")));
    add("generation/generation-vi", Canned::Json(fixture("generation-vi")));
    add("version/moon", Canned::Json(fixture("version-moon")));
    routes
}

// Runs the server on its own thread and runtime so both the async and the
// blocking client can talk to it.
fn spawn_mock_api() -> ClientConfig {
    init_tracing();
    let app = Router::new()
        .fallback(serve_canned)
        .with_state(Arc::new(routes()));

    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });
    let addr = rx.recv().unwrap();
    ClientConfig::with_api_url(format!("http://{addr}/api/v2"))
}

fn local_http() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

fn client() -> Client {
    Client::with_http(local_http(), spawn_mock_api())
}

#[tokio::test]
async fn test_fetch_bulbasaur() {
    let bulbasaur = client().get_pokemon("bulbasaur").await.unwrap();
    assert_eq!(bulbasaur.id(), 1);
    assert_eq!(bulbasaur.height(), 7);
    assert_eq!(bulbasaur.weight(), 69);
    assert_eq!(bulbasaur.base_experience(), Some(64));
    assert_eq!(
        bulbasaur.types().to_vec(),
        vec![PokemonType::Grass, PokemonType::Poison]
    );
    assert!(bulbasaur.sprite(SpriteKind::FrontDefault).unwrap().url().is_some());
    assert_eq!(bulbasaur.stat(StatKind::Speed).unwrap().base_stat(), 45);
}

#[tokio::test]
async fn test_by_name_and_by_id_are_equal() {
    let client = client();
    assert_eq!(
        client.get_pokemon("bulbasaur").await.unwrap(),
        client.get_pokemon_by_id(1).await.unwrap()
    );
    assert_eq!(
        client.get_move("body-slam").await.unwrap(),
        client.get_move_by_id(34).await.unwrap()
    );
    assert_eq!(
        client.get_ability("levitate").await.unwrap(),
        client.get_ability_by_id(26).await.unwrap()
    );
    assert_eq!(
        client.get_species("pikachu").await.unwrap(),
        client.get_species_by_id(25).await.unwrap()
    );
    assert_eq!(
        client.get_encounters("starly").await.unwrap(),
        client.get_encounters_by_id(398).await.unwrap()
    );
}

#[tokio::test]
async fn test_fetch_body_slam() {
    let body_slam = client().get_move("body-slam").await.unwrap();
    assert_eq!(body_slam.accuracy(), Some(100));
    assert_eq!(body_slam.power(), Some(85));
    assert_eq!(body_slam.power_points(), Some(15));
    assert_eq!(body_slam.priority(), 0);
    assert_eq!(body_slam.machine(VersionGroup::RedBlue), Some(120));
}

#[tokio::test]
async fn test_fetch_starly_encounters() {
    let encounters = client().get_encounters("starly").await.unwrap();
    let great_marsh = encounters
        .iter()
        .find(|encounter| encounter.location_area() == "great-marsh-area-1")
        .unwrap();
    let first = &great_marsh.details()[0];
    assert_eq!(first.max_chance(), 20);
    assert_eq!(first.version(), Version::Diamond);
    assert_eq!(first.encounter_details()[0].method(), EncounterMethod::Walk);
}

#[tokio::test]
async fn test_species_of_pokemon() {
    let client = client();
    let bulbasaur = client.get_pokemon("bulbasaur").await.unwrap();
    // The mock only serves pikachu's species.
    let err = client.get_species_of(&bulbasaur).await.unwrap_err();
    assert!(matches!(err, Error::NotFound { ref resource } if resource == "pokemon-species/bulbasaur"));
}

#[tokio::test]
async fn test_load_static_details() {
    let client = client();

    let group = client.load(VersionGroup::DiamondPearl).await.unwrap();
    assert_eq!(group.generation(), Generation::IV);
    assert_eq!(group.versions(), &[Version::Diamond, Version::Pearl]);
    assert!(group.move_learn_methods().contains(&MoveLearnMethod::Tutor));

    let generation = client.load(Generation::VI).await.unwrap();
    assert_eq!(generation.types(), &[PokemonType::Fairy]);
    assert_eq!(
        generation.localized_names().get(Language::English).unwrap().name(),
        "Generation VI"
    );

    let moon = client.load(Version::Moon).await.unwrap();
    assert_eq!(moon.group(), VersionGroup::SunMoon);

    let err = client.load(Pokedex::Galar).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_not_found() {
    let client = client();
    let err = client.get_pokemon("missingno").await.unwrap_err();
    assert!(matches!(err, Error::NotFound { ref resource } if resource == "pokemon/missingno"));
    assert!(client.get_pokemon_by_id(0).await.unwrap_err().is_not_found());
    assert!(client.get_encounters("missingno").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_identifiers_stay_in_one_segment() {
    let client = client();
    for identifier in ["bulbasaur?", "bulbasaur#x", "bulbasaur?limit=1", "..", "."] {
        let err = client.get_pokemon(identifier).await.unwrap_err();
        assert!(err.is_not_found(), "{identifier:?} gave {err}");
    }
    assert!(client.get_encounters("starly?").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_transport_failures() {
    let client = client();
    assert!(matches!(
        client.get_pokemon("garbled").await.unwrap_err(),
        Error::Transport { .. }
    ));
    let err = client.get_pokemon("teapot").await.unwrap_err();
    match err {
        Error::Transport { source, .. } => {
            assert_eq!(source.status(), Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
        }
        other => panic!("unexpected error: {other}"),
    }

    let unreachable = Client::with_http(local_http(), ClientConfig::with_api_url("http://127.0.0.1:1"));
    assert!(matches!(
        unreachable.get_pokemon("bulbasaur").await.unwrap_err(),
        Error::Transport { .. }
    ));
}

#[tokio::test]
async fn test_mapping_failures() {
    let client = client();
    assert!(matches!(
        client.get_pokemon("broken-saur").await.unwrap_err(),
        Error::MalformedResource { kind: "pokemon", .. }
    ));
    assert!(matches!(
        client.get_pokemon("cosmic-saur").await.unwrap_err(),
        Error::UnknownEnumValue { kind: "type", ref value } if value == "cosmic"
    ));
}

#[test]
fn test_blocking_client() {
    let inner = Client::with_http(local_http(), spawn_mock_api());
    let client = blocking::Client::from_async(inner).unwrap();

    let bulbasaur = client.get_pokemon("bulbasaur").unwrap();
    assert_eq!(bulbasaur, client.get_pokemon_by_id(1).unwrap());

    let pikachu = client.get_species("pikachu").unwrap();
    assert_eq!(pikachu.pokedex_number(Pokedex::UpdatedHoenn), Some(163));

    let levitate = client.get_ability("levitate").unwrap();
    assert_eq!(levitate.generation(), Generation::III);

    assert!(client.get_move("splash").unwrap_err().is_not_found());
    assert_eq!(client.load(VersionGroup::DiamondPearl).unwrap().id(), 8);
}

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_mapped_entities_are_logged() {
    let inner = Client::with_http(local_http(), spawn_mock_api());
    let client = blocking::Client::from_async(inner).unwrap();

    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    // The blocking client drives each request on this thread.
    tracing::subscriber::with_default(subscriber, || {
        client.get_move("body-slam").unwrap();
        client.get_ability("levitate").unwrap();
        client.get_species("pikachu").unwrap();
        client.get_encounters("starly").unwrap();
        client.load(VersionGroup::DiamondPearl).unwrap();
    });

    let contents = log.contents();
    for line in [
        "Mapped move: body-slam",
        "Mapped ability: levitate",
        "Mapped pokemon-species: pikachu",
        "encounters for starly",
        "Mapped version-group: diamond-pearl",
    ] {
        assert!(contents.contains(line), "missing {line:?} in:\n{contents}");
    }
}
