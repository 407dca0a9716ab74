use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use zoo_core::{ScopedTimer, Ticker};

#[tokio::test(start_paused = true)]
async fn countdown_callback_fires_exactly_once() {
    let fires = Arc::new(AtomicU32::new(0));
    let counter = fires.clone();

    let timer = ScopedTimer::start(Ticker::countdown(3.0, 1.0), Duration::from_millis(100), move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    // margen amplio: con el reloj pausado el tiempo avanza sólo al dormir
    tokio::time::sleep(Duration::from_millis(1000)).await;

    assert_eq!(fires.load(Ordering::SeqCst), 1, "un único disparo por ciclo");
    assert!(timer.is_finished());
    assert_eq!(timer.value(), 0.0);
}

#[tokio::test(start_paused = true)]
async fn stop_before_the_bound_discards_the_callback() {
    let fires = Arc::new(AtomicU32::new(0));
    let counter = fires.clone();

    let timer = ScopedTimer::start(Ticker::countdown(10.0, 1.0), Duration::from_millis(100), move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    tokio::time::sleep(Duration::from_millis(250)).await;
    timer.stop();
    timer.stop(); // idempotente
    tokio::time::sleep(Duration::from_millis(2000)).await;

    assert_eq!(fires.load(Ordering::SeqCst), 0);
    assert!(timer.is_finished());
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_cancels_the_task() {
    let fires = Arc::new(AtomicU32::new(0));
    {
        let counter = fires.clone();
        let _timer = ScopedTimer::start(Ticker::countdown(5.0, 1.0), Duration::from_millis(100), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        // la pantalla se desmonta acá
    }
    tokio::time::sleep(Duration::from_millis(2000)).await;
    assert_eq!(fires.load(Ordering::SeqCst), 0, "sin callback tardío tras el drop");
}

#[tokio::test(start_paused = true)]
async fn progress_publishes_values_up_to_the_limit() {
    let timer = ScopedTimer::start(Ticker::progress(100.0, 25.0), Duration::from_millis(50), || {});
    let mut rx = timer.subscribe();

    let mut seen = Vec::new();
    while rx.changed().await.is_ok() {
        seen.push(*rx.borrow());
    }

    // watch puede coalescer valores intermedios; el orden y el cierre no
    assert!(seen.windows(2).all(|w| w[0] < w[1]), "progreso estrictamente creciente: {:?}", seen);
    assert_eq!(seen.last(), Some(&100.0));
    assert!(timer.is_finished());
}

#[test]
fn restart_allows_a_second_cycle() {
    // tokio-test: runtime mínimo para un ciclo corto en tiempo real
    tokio_test::block_on(async {
        let fires = Arc::new(AtomicU32::new(0));
        let counter = fires.clone();
        let mut ticker = Ticker::countdown(1.0, 1.0);

        let timer = ScopedTimer::start(ticker.clone(), Duration::from_millis(1), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        while !timer.is_finished() {
            tokio::time::sleep(Duration::from_millis(2)).await;
        }
        assert_eq!(fires.load(Ordering::SeqCst), 1);

        // segundo ciclo con el mismo ticker rearmado
        ticker.restart();
        let counter = fires.clone();
        let timer = ScopedTimer::start(ticker, Duration::from_millis(1), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        while !timer.is_finished() {
            tokio::time::sleep(Duration::from_millis(2)).await;
        }
        assert_eq!(fires.load(Ordering::SeqCst), 2);
    });
}
