use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};
use mipmap::run::{distribute, generate};
use mipmap::{
    Density, Distribute, Error, Filter, Generate, Observer, Outcome, SizeMapping, Strategy,
    LAUNCHER, LAUNCHER_ROUND,
};
use std::path::Path;
use tempfile::TempDir;

fn write_icon(path: &Path, size: u32) {
    let img = RgbaImage::from_fn(size, size, |x, y| {
        Rgba([(x * 255 / size) as u8, (y * 255 / size) as u8, 128, 255])
    });
    DynamicImage::ImageRgba8(img).save(path).unwrap();
}

fn read_pair(res: &Path, density: Density) -> (Vec<u8>, Vec<u8>) {
    let dir = res.join(density.dir_name());
    (
        std::fs::read(dir.join(LAUNCHER)).unwrap(),
        std::fs::read(dir.join(LAUNCHER_ROUND)).unwrap(),
    )
}

#[derive(Default)]
struct Recorder {
    total: Option<usize>,
    seen: Vec<(usize, String)>,
}

impl Observer for Recorder {
    fn start(&mut self, total: usize) {
        self.total = Some(total);
    }

    fn outcome(&mut self, index: usize, outcome: &Outcome) {
        self.seen.push((index, outcome.file_name().to_string()));
    }
}

fn distribute_fixture(strategy: Strategy) -> (TempDir, Distribute) {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("my_icons");
    std::fs::create_dir(&source).unwrap();
    write_icon(&source.join("icon_48.png"), 48);
    write_icon(&source.join("icon_72.png"), 72);
    write_icon(&source.join("weird.png"), 32);
    std::fs::write(source.join("notes.txt"), "48").unwrap();
    let config = Distribute {
        source,
        res: dir.path().join("res"),
        mapping: [(48, Density::Mdpi), (72, Density::Hdpi)]
            .into_iter()
            .collect(),
        strategy,
    };
    (dir, config)
}

#[test]
fn distribute_places_matched_and_skips_unmatched() {
    for strategy in [Strategy::Exact, Strategy::Substring, Strategy::Longest] {
        let (_dir, config) = distribute_fixture(strategy);
        let mut recorder = Recorder::default();
        let report = distribute(&config, &mut recorder).unwrap();

        assert_eq!(report.written(), 2);
        assert_eq!(report.skipped(), 1);
        assert!(report.is_success());
        assert_eq!(recorder.total, Some(3));
        assert_eq!(
            recorder.seen,
            vec![
                (0, "icon_48.png".to_string()),
                (1, "icon_72.png".to_string()),
                (2, "weird.png".to_string()),
            ]
        );
        match &report.outcomes[2] {
            Outcome::Skipped { reason, .. } => assert!(matches!(reason, Error::Unresolved(_))),
            other => panic!("expected weird.png to be skipped, got {:?}", other),
        }

        for (density, name) in [(Density::Mdpi, "icon_48.png"), (Density::Hdpi, "icon_72.png")] {
            let original = std::fs::read(config.source.join(name)).unwrap();
            let (square, round) = read_pair(&config.res, density);
            assert_eq!(square, original);
            assert_eq!(round, original);
        }
        let dirs = std::fs::read_dir(&config.res).unwrap().count();
        assert_eq!(dirs, 2);
    }
}

#[test]
fn written_outcome_points_at_both_files() {
    let (_dir, config) = distribute_fixture(Strategy::Exact);
    let report = distribute(&config, &mut ()).unwrap();
    let (density, pair) = match &report.outcomes[1] {
        Outcome::Written { density, pair, .. } => (*density, pair),
        other => panic!("expected icon_72.png to be written, got {:?}", other),
    };
    assert_eq!(density, Density::Hdpi);
    assert_eq!(pair.dir(), config.res.join("mipmap-hdpi"));
    assert_eq!(pair.square(), pair.dir().join(LAUNCHER));
    assert_eq!(pair.round(), pair.dir().join(LAUNCHER_ROUND));
    let [square, round] = pair.paths().map(|path| std::fs::read(path).unwrap());
    assert_eq!(square, round);
    assert_eq!(square, std::fs::read(config.source.join("icon_72.png")).unwrap());
}

#[test]
fn exact_skip_reports_unmapped_size() {
    let (_dir, config) = distribute_fixture(Strategy::Exact);
    write_icon(&config.source.join("icon_100.png"), 100);
    let report = distribute(&config, &mut ()).unwrap();
    assert_eq!(report.skipped(), 2);
    let reasons: Vec<String> = report
        .outcomes
        .iter()
        .filter_map(|outcome| match outcome {
            Outcome::Skipped { reason, .. } => Some(reason.to_string()),
            _ => None,
        })
        .collect();
    assert_eq!(
        reasons,
        vec![
            "no mapping found for size 100 in icon_100.png".to_string(),
            "could not match a size in weird.png".to_string(),
        ]
    );
    match &report.outcomes[0] {
        Outcome::Skipped { reason, .. } => {
            assert!(matches!(reason, Error::Unmapped { size: 100, .. }))
        }
        other => panic!("expected icon_100.png to be skipped, got {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn distribute_non_utf8_file_name() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = TempDir::new().unwrap();
    let source = dir.path().join("icons");
    std::fs::create_dir(&source).unwrap();
    let name = OsStr::from_bytes(b"icon_48_\xff.png");
    let path = source.join(name);
    if std::fs::write(&path, b"mdpi bytes").is_err() {
        // filesystem refuses non utf-8 names
        return;
    }
    let config = Distribute {
        source,
        res: dir.path().join("res"),
        mapping: [(48, Density::Mdpi)].into_iter().collect(),
        strategy: Strategy::Exact,
    };
    let report = distribute(&config, &mut ()).unwrap();
    assert_eq!(report.written(), 1);
    assert!(report.is_success());
    assert_eq!(report.outcomes[0].file_name(), "icon_48_\u{fffd}.png");
    let (square, round) = read_pair(&config.res, Density::Mdpi);
    assert_eq!(square, b"mdpi bytes");
    assert_eq!(round, b"mdpi bytes");
}

#[test]
fn distribute_is_idempotent() {
    let (_dir, config) = distribute_fixture(Strategy::Exact);
    distribute(&config, &mut ()).unwrap();
    let first = read_pair(&config.res, Density::Hdpi);
    distribute(&config, &mut ()).unwrap();
    let second = read_pair(&config.res, Density::Hdpi);
    assert_eq!(first, second);
    let files = std::fs::read_dir(config.res.join("mipmap-hdpi"))
        .unwrap()
        .count();
    assert_eq!(files, 2);
}

#[test]
fn distribute_missing_source_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = Distribute {
        source: dir.path().join("missing"),
        res: dir.path().join("res"),
        mapping: SizeMapping::lenient(),
        strategy: Strategy::Exact,
    };
    let err = distribute(&config, &mut ()).unwrap_err();
    assert!(matches!(err, Error::MissingSource(_)));
    assert!(err.is_fatal());
    assert!(!config.res.exists());
}

#[test]
fn distribute_empty_source_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let config = Distribute {
        source: dir.path().to_path_buf(),
        res: dir.path().join("res"),
        mapping: SizeMapping::lenient(),
        strategy: Strategy::Exact,
    };
    let report = distribute(&config, &mut ()).unwrap();
    assert!(report.outcomes.is_empty());
    assert!(report.is_success());
}

#[test]
fn distribute_write_failure_continues() {
    let (dir, mut config) = distribute_fixture(Strategy::Exact);
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();
    config.res = blocker;
    let report = distribute(&config, &mut ()).unwrap();
    assert_eq!(report.failed(), 2);
    assert_eq!(report.skipped(), 1);
    assert!(!report.is_success());
    for outcome in &report.outcomes[..2] {
        match outcome {
            Outcome::Failed { error, .. } => assert!(matches!(error, Error::Write { .. })),
            other => panic!("expected a write failure, got {:?}", other),
        }
    }
}

#[test]
fn distribute_many_to_one_last_write_wins() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("icons");
    std::fs::create_dir(&source).unwrap();
    write_icon(&source.join("icon_192.png"), 192);
    write_icon(&source.join("icon_196.png"), 196);
    let config = Distribute {
        source: source.clone(),
        res: dir.path().join("res"),
        mapping: SizeMapping::lenient(),
        strategy: Strategy::Exact,
    };
    let report = distribute(&config, &mut ()).unwrap();
    assert_eq!(report.written(), 2);
    let (square, round) = read_pair(&config.res, Density::Xxxhdpi);
    assert_eq!(square, std::fs::read(source.join("icon_196.png")).unwrap());
    assert_eq!(square, round);
}

#[test]
fn generate_every_density() {
    let dir = TempDir::new().unwrap();
    let icon = dir.path().join("ic_brand_logo.png");
    write_icon(&icon, 300);
    let config = Generate {
        icon,
        res: dir.path().join("res"),
        mapping: SizeMapping::canonical(),
        filter: Filter::Lanczos3,
        optimize: false,
    };
    let mut recorder = Recorder::default();
    let report = generate(&config, &mut recorder).unwrap();
    assert_eq!(report.written(), 5);
    assert_eq!(recorder.total, Some(5));

    for density in Density::ALL {
        let (square, round) = read_pair(&config.res, density);
        assert_eq!(square, round);
        let img = image::load_from_memory(&square).unwrap();
        assert_eq!(img.dimensions(), (density.size(), density.size()));
    }
}

#[test]
fn generate_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let icon = dir.path().join("icon.png");
    write_icon(&icon, 64);
    let config = Generate {
        icon,
        res: dir.path().join("res"),
        mapping: SizeMapping::canonical(),
        filter: Filter::Triangle,
        optimize: true,
    };
    generate(&config, &mut ()).unwrap();
    let first = read_pair(&config.res, Density::Xxhdpi);
    generate(&config, &mut ()).unwrap();
    assert_eq!(first, read_pair(&config.res, Density::Xxhdpi));
}

#[test]
fn generate_missing_source_aborts() {
    let dir = TempDir::new().unwrap();
    let res = dir.path().join("res");
    let config = Generate {
        icon: dir.path().join("missing.png"),
        res: res.clone(),
        mapping: SizeMapping::canonical(),
        filter: Filter::default(),
        optimize: false,
    };
    let err = generate(&config, &mut ()).unwrap_err();
    assert!(matches!(err, Error::MissingSource(_)));
    assert!(!res.exists());
}

#[test]
fn generate_corrupt_source_aborts() {
    let dir = TempDir::new().unwrap();
    let icon = dir.path().join("broken.png");
    std::fs::write(&icon, b"definitely not a png").unwrap();
    let config = Generate {
        icon,
        res: dir.path().join("res"),
        mapping: SizeMapping::canonical(),
        filter: Filter::default(),
        optimize: false,
    };
    let err = generate(&config, &mut ()).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert!(!config.res.exists());
}
