//! Hero rotator timing on tokio's paused clock.
//!
//! With `start_paused = true` the runtime auto-advances virtual time whenever
//! every task is idle, so each `changed().await` lands exactly on a tick.

use std::time::Duration;

use eventeasy_core::{HeroRotator, HERO_IMAGES, ROTATION_PERIOD};
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn index_follows_fire_count() {
    let rotator = HeroRotator::start(HERO_IMAGES.len(), ROTATION_PERIOD).unwrap();
    let mut index = rotator.subscribe();
    let started = Instant::now();

    for fires in 1..=7usize {
        index.changed().await.unwrap();
        assert_eq!(*index.borrow_and_update(), fires % HERO_IMAGES.len());
        assert_eq!(started.elapsed(), ROTATION_PERIOD * fires as u32);
    }
}

#[tokio::test(start_paused = true)]
async fn returns_to_start_after_full_cycle() {
    let rotator = HeroRotator::start(HERO_IMAGES.len(), ROTATION_PERIOD).unwrap();
    let mut index = rotator.subscribe();

    for _ in 0..HERO_IMAGES.len() {
        index.changed().await.unwrap();
    }
    assert_eq!(*index.borrow(), 0);
    assert_eq!(rotator.current(), 0);
}

#[tokio::test(start_paused = true)]
async fn nothing_fires_before_first_period() {
    let rotator = HeroRotator::start(HERO_IMAGES.len(), ROTATION_PERIOD).unwrap();
    tokio::time::sleep(ROTATION_PERIOD - Duration::from_millis(1)).await;
    assert_eq!(rotator.current(), 0);

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(rotator.current(), 1);
}

#[tokio::test(start_paused = true)]
async fn cancel_before_first_fire_leaves_index_untouched() {
    let mut rotator = HeroRotator::start(HERO_IMAGES.len(), ROTATION_PERIOD).unwrap();
    let index = rotator.subscribe();
    rotator.cancel();

    tokio::time::sleep(ROTATION_PERIOD * 10).await;

    assert_eq!(*index.borrow(), 0);
    assert_eq!(rotator.current(), 0);
    assert!(!rotator.is_running());
}

#[tokio::test(start_paused = true)]
async fn no_fires_after_cancel_mid_rotation() {
    let mut rotator = HeroRotator::start(HERO_IMAGES.len(), ROTATION_PERIOD).unwrap();
    let mut index = rotator.subscribe();

    index.changed().await.unwrap();
    index.changed().await.unwrap();
    assert_eq!(*index.borrow_and_update(), 2);

    rotator.cancel();
    tokio::time::sleep(ROTATION_PERIOD * 10).await;

    assert_eq!(*index.borrow(), 2);
    // The sender went away with the task, so no change is ever reported again
    assert!(index.changed().await.is_err());
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_stops_the_timer() {
    let rotator = HeroRotator::start(HERO_IMAGES.len(), ROTATION_PERIOD).unwrap();
    let mut index = rotator.subscribe();
    drop(rotator);

    tokio::time::sleep(ROTATION_PERIOD * 5).await;

    assert_eq!(*index.borrow(), 0);
    assert!(index.changed().await.is_err());
}

#[tokio::test(start_paused = true)]
async fn cancel_twice_is_a_no_op() {
    let mut rotator = HeroRotator::start(HERO_IMAGES.len(), ROTATION_PERIOD).unwrap();
    rotator.cancel();
    rotator.cancel();
    tokio::time::sleep(ROTATION_PERIOD * 2).await;
    assert!(!rotator.is_running());
    assert_eq!(rotator.current(), 0);
}
