/// Integration tests for the server-to-client flow: load, initial sync,
/// spawn hooks and teardown.

use std::fs;

use bplocation_client::{ClientConfig, LocationClient};
use bplocation_server::{LocationServer, ServerConfig};
use bplocation_shared::{HeightmapGrid, LocationError, Pose, Vec2, Vec3};
use bplocation_test::{init_logger, tower_lines, FakePrefabHost, HostCall, MemorySource};

const RING: &str = "#Name:Ring
#Creator:Ann
#Description:\"Old stones\"
#SnapPoints
0,0,3
#Terrain
circle|0,0,0|0|3|0.5|Paved
#Pieces
stone_pillar|-2,0,0|0,0,0,1|1,1,1
stone_pillar|2,0,0|0,0,0,1|1,1,1
rune_stone|0,0,0|0,0,0,1|1,2,1";

fn loaded_server() -> LocationServer {
    init_logger();
    let mut server = LocationServer::new(ServerConfig::default()).unwrap();
    let mut source = MemorySource::new()
        .with_file("ring.bplocation", RING)
        .with_file("tower.bplocation", &tower_lines())
        .with_file("broken.bplocation", "#Pieces\nstone_pillar|0,0,0")
        .with_file("readme.txt", "not a blueprint");
    let report = server.load_from(&mut source, &mut FakePrefabHost::default());
    assert_eq!(report.loaded, vec!["bplocation:ring", "bplocation:tower"]);
    assert_eq!(report.skipped.len(), 2);
    server
}

#[test]
fn client_receives_everything_the_server_loaded() {
    let mut server = loaded_server();
    let payload = server.initial_sync_payload().unwrap();

    let mut client = LocationClient::new(ClientConfig::default()).unwrap();
    let mut host = FakePrefabHost::default();
    assert_eq!(client.receive_initial_sync(&payload, &mut host).unwrap(), 2);

    for id in ["bplocation:ring", "bplocation:tower"] {
        assert_eq!(client.catalog().get(id), server.catalog().get(id));
    }
    assert_eq!(client.catalog().get("bplocation:ring").unwrap().description(), "Old stones");
}

#[test]
fn skipped_files_report_their_reason() {
    let mut server = LocationServer::new(ServerConfig::default()).unwrap();
    let mut source = MemorySource::new()
        .with_file("broken.bplocation", "#Pieces\nstone_pillar|0,0,0")
        .with_file("readme.txt", "not a blueprint");
    let report = server.load_from(&mut source, &mut FakePrefabHost::default());
    assert!(matches!(report.skipped[0].1, LocationError::MalformedEntry(_)));
    assert_eq!(
        report.skipped[1],
        (
            "readme.txt".to_string(),
            LocationError::UnrecognizedFormat {
                extension: "txt".to_string()
            }
        )
    );
}

#[test]
fn duplicate_files_keep_the_first() {
    let mut server = LocationServer::new(ServerConfig::default()).unwrap();
    let mut source = MemorySource::new()
        .with_file("hut.bplocation", "#Name:First\nwood_wall|0,0,0|0,0,0,1|1,1,1")
        .with_file("hut.BPLOCATION", "#Name:Second\nwood_wall|0,0,0|0,0,0,1|1,1,1");
    let report = server.load_from(&mut source, &mut FakePrefabHost::default());
    assert_eq!(report.loaded, vec!["bplocation:hut"]);
    assert_eq!(
        report.skipped[0].1,
        LocationError::DuplicateIdentifier {
            id: "bplocation:hut".to_string()
        }
    );
    assert_eq!(server.catalog().get("bplocation:hut").unwrap().name(), "First");
}

#[test]
fn create_location_builds_once_and_skips_missing_prefabs() {
    let mut server = loaded_server();
    let mut host = FakePrefabHost::with_prefabs(["stone_pillar", "wood_beam"]);

    let first = server.create_location("bplocation:ring", &mut host).unwrap();
    let second = server.create_location("bplocation:ring", &mut host).unwrap();
    assert_eq!(first, second);
    assert_eq!(host.containers_created(), 1);
    // rune_stone has no prefab and is skipped
    assert_eq!(host.instances(), vec!["stone_pillar", "stone_pillar"]);
    assert_eq!(
        host.calls[1],
        HostCall::AddSnapPoint {
            container: first,
            position: Vec3::new(0.0, 0.0, 3.0)
        }
    );
}

#[test]
fn spawn_hooks_differ_by_side() {
    let mut server = loaded_server();
    let mut client = LocationClient::new(ClientConfig::default()).unwrap();
    client
        .receive_initial_sync(
            &server.initial_sync_payload().unwrap(),
            &mut FakePrefabHost::default(),
        )
        .unwrap();

    for name in ["bplocation:ring", "bplocation:tower"] {
        assert!(server.should_suppress_default_spawn(name));
        assert!(client.should_suppress_default_spawn(name));
    }
    assert!(!server.should_suppress_default_spawn("StoneCircle"));

    let pose = Pose::new(Vec3::new(0.0, 5.0, 0.0), Default::default());
    let mut server_terrain = HeightmapGrid::flat(Vec2::new(-6.0, -6.0), 1.0, 13, 0.0);
    let mut client_terrain = server_terrain.clone();

    let report = server
        .after_spawn("bplocation:ring", &pose, &mut server_terrain)
        .unwrap();
    assert_eq!(report.modifiers_applied, 1);
    assert_eq!(server_terrain.height(server_terrain.index_of(6, 6)), 5.0);

    assert!(client
        .after_spawn("bplocation:ring", &pose, &mut client_terrain)
        .is_none());
    assert_eq!(client_terrain.height(client_terrain.index_of(6, 6)), 0.0);
}

#[test]
fn resync_replaces_and_releases_old_containers() {
    let mut server = loaded_server();
    let mut client = LocationClient::new(ClientConfig::default()).unwrap();
    let mut host = FakePrefabHost::with_prefabs(["stone_pillar"]);
    client
        .receive_initial_sync(&server.initial_sync_payload().unwrap(), &mut host)
        .unwrap();
    let container = client.create_location("bplocation:ring", &mut host).unwrap();

    let mut empty_server = LocationServer::new(ServerConfig::default()).unwrap();
    empty_server.load_from(&mut MemorySource::new(), &mut FakePrefabHost::default());
    let count = client
        .receive_initial_sync(&empty_server.initial_sync_payload().unwrap(), &mut host)
        .unwrap();
    assert_eq!(count, 0);
    assert!(client.catalog().is_empty());
    assert_eq!(host.destroyed(), vec![container]);
}

#[test]
fn shutdown_destroys_containers_and_unloads() {
    let mut server = loaded_server();
    let mut host = FakePrefabHost::with_prefabs(["stone_pillar", "wood_beam"]);
    let ring = server.create_location("bplocation:ring", &mut host).unwrap();
    let tower = server.create_location("bplocation:tower", &mut host).unwrap();

    server.shutdown(&mut host);
    assert_eq!(host.destroyed(), vec![ring, tower]);
    assert!(server.catalog().is_empty());
    assert!(!server.should_suppress_default_spawn("bplocation:ring"));
}

#[test]
fn server_loads_world_directory() {
    let root = tempfile::tempdir().unwrap();
    let world = root.path().join("Midgard");
    fs::create_dir_all(&world).unwrap();
    fs::write(world.join("ring.bplocation"), RING).unwrap();

    let config = ServerConfig {
        locations_directory: root.path().to_path_buf(),
        ..ServerConfig::default()
    };
    let mut server = LocationServer::new(config).unwrap();
    let report = server.load_world("Midgard", &mut FakePrefabHost::default());
    assert_eq!(report.loaded, vec!["bplocation:ring"]);
    assert_eq!(server.catalog().get("bplocation:ring").unwrap().piece_entries().len(), 3);
}

#[test]
fn reloading_server_releases_previous_containers() {
    let mut server = loaded_server();
    let mut host = FakePrefabHost::with_prefabs(["stone_pillar"]);
    let ring = server.create_location("bplocation:ring", &mut host).unwrap();

    let mut source = MemorySource::new().with_file("ring.bplocation", RING);
    let report = server.load_from(&mut source, &mut host);
    assert_eq!(report.loaded, vec!["bplocation:ring"]);
    assert_eq!(host.destroyed(), vec![ring]);

    let rebuilt = server.create_location("bplocation:ring", &mut host).unwrap();
    assert_ne!(rebuilt, ring);
    assert_eq!(host.containers_created(), 2);
}
