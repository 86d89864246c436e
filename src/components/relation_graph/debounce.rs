/// Whether a redraw is waiting for resize signals to stop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DebounceState<H> {
	Idle,
	Pending {
		/// Container width measured at the latest signal.
		width: f64,
		/// The one armed settle timer.
		timer: H,
	},
}

/// Last-write-wins debounce over resize signals. At most one settle timer is
/// ever armed; every signal replaces it and the width it will redraw at.
#[derive(Clone, Debug)]
pub struct ResizeDebounce<H> {
	state: DebounceState<H>,
}

impl<H> Default for ResizeDebounce<H> {
	fn default() -> Self {
		Self {
			state: DebounceState::Idle,
		}
	}
}

impl<H> ResizeDebounce<H> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records a resize signal together with the timer just armed for it.
	/// Returns the superseded timer, which the caller must cancel.
	pub fn signal(&mut self, width: f64, timer: H) -> Option<H> {
		match std::mem::replace(&mut self.state, DebounceState::Pending { width, timer }) {
			DebounceState::Pending { timer, .. } => Some(timer),
			DebounceState::Idle => None,
		}
	}

	/// The armed timer elapsed: back to Idle, handing back the width to redraw at.
	pub fn fire(&mut self) -> Option<f64> {
		match std::mem::replace(&mut self.state, DebounceState::Idle) {
			DebounceState::Pending { width, .. } => Some(width),
			DebounceState::Idle => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Minimal stand-in for `setTimeout`: tracks which handles are still armed.
	#[derive(Default)]
	struct Timers {
		next: i32,
		armed: Vec<i32>,
	}

	impl Timers {
		fn arm(&mut self) -> i32 {
			self.next += 1;
			self.armed.push(self.next);
			self.next
		}

		fn clear(&mut self, handle: i32) {
			self.armed.retain(|h| *h != handle);
		}

		fn resize(&mut self, debounce: &mut ResizeDebounce<i32>, width: f64) {
			let handle = self.arm();
			if let Some(old) = debounce.signal(width, handle) {
				self.clear(old);
			}
		}

		/// Lets every armed timer elapse, collecting the redraws they trigger.
		fn elapse(&mut self, debounce: &mut ResizeDebounce<i32>) -> Vec<f64> {
			std::mem::take(&mut self.armed)
				.into_iter()
				.filter_map(|_| debounce.fire())
				.collect()
		}
	}

	#[test]
	fn burst_settles_once_with_last_width() {
		let (mut timers, mut debounce) = (Timers::default(), ResizeDebounce::new());
		for width in [900.0, 850.0, 812.0, 640.0, 600.0] {
			timers.resize(&mut debounce, width);
			assert_eq!(timers.armed.len(), 1);
		}
		assert_eq!(timers.armed, vec![5]);
		assert_eq!(timers.elapse(&mut debounce), vec![600.0]);
		assert_eq!(debounce.state, DebounceState::Idle);
	}

	#[test]
	fn each_signal_supersedes_the_armed_timer() {
		let mut debounce = ResizeDebounce::new();
		assert_eq!(debounce.signal(700.0, 1), None);
		assert_eq!(debounce.signal(710.0, 2), Some(1));
		assert_eq!(debounce.state, DebounceState::Pending { width: 710.0, timer: 2 });
		assert_eq!(debounce.fire(), Some(710.0));
	}

	#[test]
	fn separate_bursts_redraw_separately() {
		let (mut timers, mut debounce) = (Timers::default(), ResizeDebounce::new());
		timers.resize(&mut debounce, 500.0);
		assert_eq!(timers.elapse(&mut debounce), vec![500.0]);
		timers.resize(&mut debounce, 400.0);
		timers.resize(&mut debounce, 420.0);
		assert_eq!(timers.elapse(&mut debounce), vec![420.0]);
	}

	#[test]
	fn idle_never_fires() {
		let mut debounce = ResizeDebounce::<i32>::new();
		assert_eq!(debounce.fire(), None);
		debounce.signal(300.0, 7);
		assert_eq!(debounce.fire(), Some(300.0));
		assert_eq!(debounce.fire(), None);
	}
}
