//! Cache behaviour across stores and concurrent callers.

use gamut_cache::{
    Artifact, CacheError, CacheKey, CacheRecord, DocumentStore, FileStore, GamutConfig, GeometryCache,
    GeometryRequest, GeometryService, InsertOutcome, MemoryStore, RecordKind, RecordQuery,
};
use gamut_color::ColorModel;
use gamut_geometry::GeometryLattice;
use gamut_primaries::{ColorSpace, Illuminant};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::tempdir;

fn request(space: ColorSpace, divisions: u32) -> GeometryRequest {
    GeometryRequest {
        color_space: space,
        target_model: ColorModel::LchUv,
        illuminant: Illuminant::D65,
        divisions,
    }
}

fn small_config() -> GamutConfig {
    GamutConfig {
        max_divisions: 8,
        ..GamutConfig::default()
    }
}

fn bits(lattice: &GeometryLattice) -> Vec<u64> {
    lattice.points().flatten().map(|c| c.to_bits()).collect()
}

/// Racing callers on one key: one computation, one record, equal results.
#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_racing_get_or_create() {
    let cache = Arc::new(GeometryCache::new(MemoryStore::new()));
    let computed = Arc::new(AtomicUsize::new(0));
    let key = CacheKey::positions(ColorSpace::Srgb, ColorModel::Luv, Illuminant::D65, 4);

    let handles: Vec<_> = (0..32)
        .map(|_| {
            let cache = Arc::clone(&cache);
            let computed = Arc::clone(&computed);
            tokio::spawn(async move {
                cache
                    .get_or_create(key, || async move {
                        computed.fetch_add(1, Ordering::SeqCst);
                        let l = gamut_geometry::generate_lattice(4)?;
                        Ok(Artifact::Lattice(l))
                    })
                    .await
            })
        })
        .collect();

    let mut records = Vec::new();
    for h in handles {
        records.push(h.await.unwrap().unwrap());
    }
    assert_eq!(computed.load(Ordering::SeqCst), 1);
    assert!(records.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(cache.store().count(&RecordQuery::all()).await.unwrap(), 1);
}

/// Two caches over one directory stand in for two processes: the store's
/// insert-if-absent keeps a single record and the loser adopts it.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_file_store_cross_cache_race() {
    let dir = tempdir().unwrap();
    let a = Arc::new(GeometryCache::new(FileStore::open(dir.path()).await.unwrap()));
    let b = Arc::new(GeometryCache::new(FileStore::open(dir.path()).await.unwrap()));
    let key = CacheKey::facets(6);

    let run = |cache: Arc<GeometryCache<FileStore>>| {
        tokio::spawn(async move {
            cache
                .get_or_create(key, || async { Ok(Artifact::Facets(gamut_geometry::lattice_facets(6)?)) })
                .await
        })
    };
    let (ra, rb) = tokio::join!(run(a), run(b));
    let (ra, rb) = (ra.unwrap().unwrap(), rb.unwrap().unwrap());
    assert_eq!(ra, rb);

    let store = FileStore::open(dir.path()).await.unwrap();
    assert_eq!(store.count(&RecordQuery::all()).await.unwrap(), 1);
}

#[tokio::test]
async fn test_file_store_insert_if_absent() {
    let dir = tempdir().unwrap();
    let store = FileStore::open(dir.path()).await.unwrap();
    let first = CacheRecord::new(CacheKey::facets(1), Artifact::Facets(vec![[0, 3, 2], [0, 1, 3]]));
    let second = CacheRecord::new(CacheKey::facets(1), Artifact::Facets(vec![]));
    assert_eq!(store.insert_one(first.clone()).await.unwrap(), InsertOutcome::Inserted);
    assert_eq!(store.insert_one(second).await.unwrap(), InsertOutcome::AlreadyExists);
    let stored = store.find_one(&RecordQuery::exact(&CacheKey::facets(1))).await.unwrap();
    assert_eq!(stored, Some(first));
}

/// A service over a file store serves a second instance from disk.
#[tokio::test]
async fn test_service_persists_across_instances() {
    let dir = tempdir().unwrap();
    let req = request(ColorSpace::AdobeRgb1998, 4);

    let first = GeometryService::new(FileStore::open(dir.path()).await.unwrap(), small_config());
    let v1 = first.vertex_data(&req).await.unwrap();

    let second = GeometryService::new(FileStore::open(dir.path()).await.unwrap(), small_config());
    let before = second.cache().store().count(&RecordQuery::all()).await.unwrap();
    let v2 = second.vertex_data(&req).await.unwrap();
    let after = second.cache().store().count(&RecordQuery::all()).await.unwrap();

    assert_eq!(v1, v2);
    assert_eq!(before, after);
    // reference + positions + colors + facets
    assert_eq!(after, 4);
}

#[tokio::test]
async fn test_facets_independent_of_space() {
    let service = GeometryService::new(MemoryStore::new(), small_config());
    for cs in ColorSpace::ALL {
        service.vertex_data(&request(cs, 3)).await.unwrap();
    }
    let store = service.cache().store();
    assert_eq!(store.count(&RecordQuery::all().kind(RecordKind::Facets)).await.unwrap(), 1);
    assert_eq!(store.count(&RecordQuery::all().kind(RecordKind::Colors)).await.unwrap(), 6);
}

#[tokio::test]
async fn test_clamped_request_reuses_records() {
    let service = GeometryService::new(MemoryStore::new(), small_config());
    let big = service.vertex_data(&request(ColorSpace::Srgb, 500)).await.unwrap();
    let max = service.vertex_data(&request(ColorSpace::Srgb, 8)).await.unwrap();
    assert_eq!(big, max);
    let q = RecordQuery::all().kind(RecordKind::Positions).fidelity(8);
    // reference lattice and the mapped positions
    assert_eq!(service.cache().store().count(&q).await.unwrap(), 2);
}

/// Request and response as they cross the JSON boundary.
#[tokio::test]
async fn test_json_request_boundary() {
    let req: GeometryRequest = serde_json::from_str(
        r#"{"colorSpace":"display-p3","targetModel":"lchuv","illuminant":"d50","divisions":3}"#,
    )
    .unwrap();
    assert_eq!(req.color_space, ColorSpace::DisplayP3);
    assert_eq!(req.target_model, ColorModel::LchUv);

    let service = GeometryService::new(MemoryStore::new(), small_config());
    let vertices = service.vertex_data(&req).await.unwrap();
    let json = serde_json::to_value(&vertices).unwrap();
    // 6 faces of 4x4 points, 6 faces of 3x3 quads
    assert_eq!(json["positions"].as_array().unwrap().len(), 6 * 16 * 3);
    assert_eq!(json["colors"].as_array().unwrap().len(), 6 * 16 * 3);
    assert_eq!(json["indices"].as_array().unwrap().len(), 6 * 9 * 2 * 3);
}

/// The caller that computes a record and every later reader of the file
/// store see the same bits.
#[tokio::test]
async fn test_file_store_readers_bit_identical() {
    let dir = tempdir().unwrap();
    let config = GamutConfig {
        max_divisions: 16,
        ..GamutConfig::default()
    };
    let first = GeometryService::new(FileStore::open(dir.path()).await.unwrap(), config.clone());
    let second = GeometryService::new(FileStore::open(dir.path()).await.unwrap(), config);

    for cs in ColorSpace::ALL {
        for model in [ColorModel::Xyz, ColorModel::XyY, ColorModel::Luv, ColorModel::LchUv] {
            let req = GeometryRequest {
                color_space: cs,
                target_model: model,
                illuminant: Illuminant::D50,
                divisions: 16,
            };
            let computed = first.positions(&req).await.unwrap();
            let loaded = second.positions(&req).await.unwrap();
            assert_eq!(bits(&computed), bits(&loaded), "{cs} {model}");
        }
        let req = request(cs, 16);
        assert_eq!(bits(&first.colors(&req).await.unwrap()), bits(&second.colors(&req).await.unwrap()));
    }
}

/// Racing caches over one directory agree bitwise on float payloads too.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_file_store_race_on_positions() {
    let dir = tempdir().unwrap();
    let a = Arc::new(GeometryCache::new(FileStore::open(dir.path()).await.unwrap()));
    let b = Arc::new(GeometryCache::new(FileStore::open(dir.path()).await.unwrap()));
    let key = CacheKey::positions(ColorSpace::ProPhoto, ColorModel::LchUv, Illuminant::D65, 8);

    let run = |cache: Arc<GeometryCache<FileStore>>| {
        tokio::spawn(async move {
            cache
                .get_or_create(key, || async {
                    let lattice = gamut_geometry::generate_lattice(8)?;
                    let space = ColorSpace::ProPhoto.data();
                    let mapped = gamut_geometry::map_positions(&lattice, space, ColorModel::LchUv, Illuminant::D65)?;
                    Ok(Artifact::Lattice(mapped))
                })
                .await
        })
    };
    let (ra, rb) = tokio::join!(run(a), run(b));
    let la = ra.unwrap().unwrap().into_lattice().unwrap();
    let lb = rb.unwrap().unwrap().into_lattice().unwrap();
    assert_eq!(bits(&la), bits(&lb));
}

/// A vanished store directory surfaces as an error and leaves nothing behind.
#[tokio::test]
async fn test_missing_store_dir_unavailable() {
    let root = tempdir().unwrap();
    let dir = root.path().join("records");
    let cache = GeometryCache::new(FileStore::open(&dir).await.unwrap());
    std::fs::remove_dir_all(&dir).unwrap();

    let calls = AtomicUsize::new(0);
    let err = cache
        .get_or_create(CacheKey::facets(2), || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(Artifact::Facets(gamut_geometry::lattice_facets(2)?))
        })
        .await
        .unwrap_err();
    assert!(matches!(err, CacheError::StoreUnavailable { operation: "insert", .. }), "{err}");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(matches!(
        cache.store().count(&RecordQuery::all()).await,
        Err(CacheError::StoreUnavailable { operation: "scan", .. })
    ));

    std::fs::create_dir_all(&dir).unwrap();
    assert_eq!(cache.store().count(&RecordQuery::all()).await.unwrap(), 0);
}
