use ihub_kernel::security::asset::AssetGuard;

#[test]
fn asset_guard_accepts_and_rejects() {
    assert_eq!(AssetGuard::verify_file_name("heart.svg").unwrap(), "heart.svg");

    assert!(AssetGuard::verify_file_name("../secret.svg").is_err());

    assert!(AssetGuard::verify_file_name("nested/heart.svg").is_err());
}
