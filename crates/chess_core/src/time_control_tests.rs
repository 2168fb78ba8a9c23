use super::*;
use std::thread;

#[test]
fn test_time_control_expiry() {
    let mut tc = TimeControl::new(Some(Duration::from_millis(10)));
    tc.start();
    assert!(!tc.is_stopped());

    // Wait for time to expire
    thread::sleep(Duration::from_millis(20));
    tc.check_time();
    assert!(tc.is_stopped());
    assert_eq!(tc.remaining(), Some(Duration::ZERO));
}

#[test]
fn test_time_control_no_limit() {
    let mut tc = TimeControl::new(None);
    tc.start();
    thread::sleep(Duration::from_millis(10));
    assert!(!tc.check_time());
    assert!(tc.remaining().is_none());
}

#[test]
fn test_time_control_manual_stop() {
    let mut tc = TimeControl::new(None);
    tc.start();
    assert!(!tc.is_stopped());
    tc.stop_handle().store(true, Ordering::SeqCst);
    assert!(tc.is_stopped());

    // Restarting clears the flag for the next search.
    tc.start();
    assert!(!tc.is_stopped());
}

#[test]
fn test_check_interval() {
    let tc = TimeControl::new(None).with_check_interval(4);
    assert!(tc.should_check_time(0));
    assert!(!tc.should_check_time(3));
    assert!(tc.should_check_time(8));
}
