//! `ScopedTimer`: adquisición con alcance de un temporizador.
//!
//! La tarea que tickea vive exactamente lo que vive el handle: `stop()` o
//! `Drop` abortan la tarea y descartan los ticks pendientes sin invocar el
//! callback. El callback de completitud es `FnOnce` y la tarea termina tras
//! invocarlo, así que el doble disparo es imposible por construcción.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::ticker::{TickOutcome, Ticker};

pub struct ScopedTimer {
    task: JoinHandle<()>,
    value_rx: watch::Receiver<f64>,
}

impl ScopedTimer {
    /// Arranca una tarea que tickea cada `tick_interval` hasta que el ticker
    /// complete o el handle se suelte. `on_complete` se invoca a lo sumo una
    /// vez, desde la tarea.
    ///
    /// Requiere un runtime tokio activo.
    pub fn start<F>(mut ticker: Ticker, tick_interval: Duration, on_complete: F) -> Self
        where F: FnOnce() + Send + 'static
    {
        let (value_tx, value_rx) = watch::channel(ticker.value());
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick_interval);
            // el primer tick de `interval` resuelve de inmediato
            interval.tick().await;
            loop {
                interval.tick().await;
                match ticker.tick() {
                    TickOutcome::Ticked => {
                        let _ = value_tx.send(ticker.value());
                    }
                    TickOutcome::Completed => {
                        let _ = value_tx.send(ticker.value());
                        on_complete();
                        break;
                    }
                    TickOutcome::Idle => break,
                }
            }
        });
        Self { task, value_rx }
    }

    /// Último valor publicado por la tarea.
    pub fn value(&self) -> f64 {
        *self.value_rx.borrow()
    }

    /// Receptor para observar el valor en vivo (render de progreso).
    pub fn subscribe(&self) -> watch::Receiver<f64> {
        self.value_rx.clone()
    }

    /// `true` cuando la tarea terminó (completó o fue cancelada).
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Cancela los ticks pendientes. Idempotente; el callback no se invoca.
    pub fn stop(&self) {
        self.task.abort();
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
