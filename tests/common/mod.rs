#![allow(dead_code)]

use rosu_hardrock::Beatmap;

pub const TEST_MAP_PATH: &str = "./resources/mirror.osu";

#[macro_export]
#[rustfmt::skip]
macro_rules! test_map {
    () => {{
        #[cfg(not(any(feature = "async_tokio", feature = "async_std")))]
        { common::test_map() }
        #[cfg(any(feature = "async_tokio", feature = "async_std"))]
        { common::test_map().await }
    }};
}

#[cfg(not(any(feature = "async_tokio", feature = "async_std")))]
pub fn test_map() -> Beatmap {
    Beatmap::from_path(TEST_MAP_PATH).unwrap()
}

#[cfg(any(feature = "async_tokio", feature = "async_std"))]
pub async fn test_map() -> Beatmap {
    Beatmap::from_path(TEST_MAP_PATH).await.unwrap()
}

/// Decoding from bytes is sync for all features.
pub fn test_map_from_bytes() -> Beatmap {
    let bytes = std::fs::read(TEST_MAP_PATH).unwrap();

    Beatmap::from_bytes(&bytes).unwrap()
}
