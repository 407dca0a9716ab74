/// Resultado de un tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// El ticker está detenido o ya disparó; el tick no tuvo efecto.
    Idle,
    /// El valor avanzó hacia el límite sin alcanzarlo.
    Ticked,
    /// El valor alcanzó el límite. Se observa exactamente una vez por ciclo
    /// de arranque; los ticks posteriores devuelven `Idle`.
    Completed,
}

/// Máquina de estados de un temporizador monotónico.
///
/// `countdown` decrementa hacia 0; `progress` incrementa hacia el límite.
/// El valor se recorta en el límite (nunca lo sobrepasa) y el disparo de
/// completitud queda trabado hasta `restart`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticker {
    value: f64,
    start_value: f64,
    step: f64,
    bound: f64,
    rising: bool,
    running: bool,
    fired: bool,
}

impl Ticker {
    /// Cuenta atrás desde `initial` hasta 0, `step` por tick.
    pub fn countdown(initial: f64, step: f64) -> Self {
        debug_assert!(step > 0.0, "step debe ser positivo");
        Self { value: initial,
               start_value: initial,
               step,
               bound: 0.0,
               rising: false,
               running: true,
               fired: false }
    }

    /// Progreso desde 0 hasta `limit`, `step` por tick.
    pub fn progress(limit: f64, step: f64) -> Self {
        debug_assert!(step > 0.0, "step debe ser positivo");
        Self { value: 0.0,
               start_value: 0.0,
               step,
               bound: limit,
               rising: true,
               running: true,
               fired: false }
    }

    /// Avanza un tick. Recorta en el límite; al alcanzarlo detiene el ticker
    /// y devuelve `Completed` una única vez.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running || self.fired {
            return TickOutcome::Idle;
        }
        self.value = if self.rising {
            (self.value + self.step).min(self.bound)
        } else {
            (self.value - self.step).max(self.bound)
        };
        if self.value == self.bound {
            self.fired = true;
            self.running = false;
            TickOutcome::Completed
        } else {
            TickOutcome::Ticked
        }
    }

    /// Detiene el ticker. Idempotente; los ticks posteriores no hacen nada.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Vuelve al valor inicial y rearma el disparo.
    pub fn restart(&mut self) {
        self.value = self.start_value;
        self.running = true;
        self.fired = false;
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Distancia restante hasta el límite. Nunca negativa.
    pub fn remaining(&self) -> f64 {
        (self.value - self.bound).abs()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_fires_once_after_exact_ticks() {
        let mut t = Ticker::countdown(3.0, 1.0);
        assert_eq!(t.tick(), TickOutcome::Ticked);
        assert_eq!(t.tick(), TickOutcome::Ticked);
        assert_eq!(t.tick(), TickOutcome::Completed);
        // trabado: más ticks no vuelven a disparar ni mueven el valor
        assert_eq!(t.tick(), TickOutcome::Idle);
        assert_eq!(t.value(), 0.0);
        assert!(t.has_fired());
        assert!(!t.is_running());
    }

    #[test]
    fn countdown_clamps_at_zero() {
        let mut t = Ticker::countdown(2.5, 1.0);
        t.tick();
        t.tick();
        assert_eq!(t.tick(), TickOutcome::Completed);
        assert!(t.value() >= 0.0);
        assert_eq!(t.remaining(), 0.0);
    }

    #[test]
    fn progress_rises_to_limit() {
        let mut t = Ticker::progress(100.0, 40.0);
        assert_eq!(t.tick(), TickOutcome::Ticked);
        assert_eq!(t.tick(), TickOutcome::Ticked);
        assert_eq!(t.tick(), TickOutcome::Completed);
        assert_eq!(t.value(), 100.0);
    }

    #[test]
    fn stop_is_idempotent_and_discards_ticks() {
        let mut t = Ticker::countdown(5.0, 1.0);
        t.tick();
        t.stop();
        t.stop();
        assert_eq!(t.tick(), TickOutcome::Idle);
        assert_eq!(t.value(), 4.0);
        assert!(!t.has_fired());
    }

    #[test]
    fn restart_rearms_the_latch() {
        let mut t = Ticker::countdown(1.0, 1.0);
        assert_eq!(t.tick(), TickOutcome::Completed);
        t.restart();
        assert_eq!(t.value(), 1.0);
        assert_eq!(t.tick(), TickOutcome::Completed);
    }
}
