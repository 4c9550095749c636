use gxkit::prelude::*;
use gxkit::converter::{gxtx_bytes_to_png_bytes, png_bytes_to_canonical, png_bytes_to_gxtx_bytes};
use gxkit::formats::gxtx::GXTX_MAGIC;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn dxt1_texture(width: u16, height: u16, reserved: u16) -> Vec<u8> {
    let image = CanonicalImage::filled(u32::from(width), u32::from(height), [0xFF, 0x30, 0x60, 0x90]);
    let original = TextureHeader {
        magic: GXTX_MAGIC,
        width,
        height,
        data_size: 0,
        reserved,
        kind: CompressionKind::Dxt1,
    };
    reconstruct(&original, &image).unwrap()
}

#[test]
fn test_bank_round_trip_through_disk() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("menu");
    std::fs::create_dir_all(&source).unwrap();
    for i in 0..11 {
        std::fs::write(source.join(format!("image{i:02}")), vec![i as u8; i + 1]).unwrap();
    }

    let bank_path = dir.path().join("menu.art");
    ArtOperations::create(&source, &bank_path).unwrap();

    let bank = std::fs::read(&bank_path).unwrap();
    let entries = segment(&bank).unwrap();
    let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names[0], "image00");
    assert_eq!(names[10], "image10");

    let dest = ArtOperations::extract(&bank_path, dir.path().join("out")).unwrap();
    for i in 0..11 {
        let data = std::fs::read(dest.join(format!("image{i:02}"))).unwrap();
        assert_eq!(data, vec![i as u8; i + 1]);
    }
}

#[test]
fn test_texture_edit_cycle() {
    let original = dxt1_texture(8, 8, 0x4242);

    let png = gxtx_bytes_to_png_bytes(&original).unwrap();
    let view = png_bytes_to_canonical(&png).unwrap();
    assert_eq!((view.width(), view.height()), (8, 8));

    let edited = CanonicalImage::filled(16, 4, [0xFF, 0xE0, 0x20, 0x20]);
    let edited_png = gxkit::converter::canonical_to_png_bytes(&edited).unwrap();
    let rebuilt = png_bytes_to_gxtx_bytes(&edited_png, &original, &EncodeOptions::new()).unwrap();

    let texture = GxtxTexture::read(&rebuilt).unwrap();
    assert_eq!(texture.header.width, 16);
    assert_eq!(texture.header.height, 4);
    assert_eq!(texture.header.reserved, 0x4242);
    assert_eq!(texture.header.kind, CompressionKind::Dxt1);
    assert_eq!(texture.header.data_size as usize, texture.payload.len());

    let [a, r, _, _] = texture.decode_image().unwrap().pixel(0, 0).unwrap();
    assert_eq!(a, 0xFF);
    assert!(r > 0xC0);
}

#[test]
fn test_extract_bank_of_textures_as_png() {
    let dir = tempdir().unwrap();
    let bank = gxkit::formats::art::build_bank(&[dxt1_texture(4, 4, 0), dxt1_texture(8, 4, 0)]).unwrap();
    let bank_path = dir.path().join("cars.art");
    std::fs::write(&bank_path, bank).unwrap();

    let listing = ArtOperations::list(&bank_path).unwrap();
    assert_eq!(listing.len(), 2);
    assert_eq!(listing[1].texture.as_ref().map(|t| t.width), Some(8));

    let options = ArtExtractionOptions::new().with_convert_to_png(true);
    let dest = ArtOperations::extract_with_options(&bank_path, dir.path(), options, &|_| {}).unwrap();
    assert!(dest.join("image0").exists());
    assert!(dest.join("image1.png").exists());

    let png = std::fs::read(dest.join("image1.png")).unwrap();
    assert_eq!(png_bytes_to_canonical(&png).unwrap().width(), 8);
}

#[test]
fn test_registry_dispatch() {
    let registry = FormatRegistry::with_defaults();
    let texture = dxt1_texture(4, 4, 0);

    match registry.load("image0", &texture).unwrap() {
        Some(Resource::Texture(t)) => assert_eq!(t.header.kind, CompressionKind::Dxt1),
        other => panic!("unexpected: {other:?}"),
    }
    assert_eq!(
        registry.classify("x.art", &[]).map(|h| h.kind),
        Some(FileKind::ArtBank)
    );
}

#[test]
fn test_raw_texture_cannot_be_rebuilt() {
    let header = TextureHeader {
        magic: GXTX_MAGIC,
        width: 2,
        height: 2,
        data_size: 8,
        reserved: 0,
        kind: CompressionKind::A4R4G4B4,
    };
    let image = CanonicalImage::filled(2, 2, [0xFF, 0, 0, 0]);
    assert!(matches!(
        reconstruct(&header, &image),
        Err(Error::UnsupportedOperation { .. })
    ));
}
