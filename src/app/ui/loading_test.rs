use super::*;

#[test]
fn test_frames_cycle() {
    let mut loading = Loading::default();
    assert_eq!(loading.frame(), FRAMES[0]);
    for _ in 0..TICKS_PER_FRAME {
        loading.tick();
    }
    assert_eq!(loading.frame(), FRAMES[1]);
    for _ in 0..TICKS_PER_FRAME * 3 {
        loading.tick();
    }
    assert_eq!(loading.frame(), FRAMES[0]);
}
