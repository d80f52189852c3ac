//! Lazy init-once caching for dispatch tables.
//!
//! [`OnceCache`] has the semantics of `std::sync::OnceLock::get_or_init` for
//! `Copy` values but also works on `no_std` targets.
//!
//! # Caching Strategy
//!
//! - **std**: `OnceLock` for thread-safe lazy initialization
//! - **no_std with atomics**: atomic state machine (UNINIT → INITING → READY)
//! - **no_std without atomics**: per-call computation (single-threaded embedded)

#[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
use core::cell::UnsafeCell;
#[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
use core::mem::MaybeUninit;

/// An init-once cell for a `Copy` value.
///
/// - Zero-cost after first initialization (one load)
/// - Thread-safe on targets with atomics
/// - The initializer runs at most once on std and atomic targets
pub struct OnceCache<T: Copy> {
  #[cfg(feature = "std")]
  inner: std::sync::OnceLock<T>,

  #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
  state: core::sync::atomic::AtomicU8,
  #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
  value: UnsafeCell<MaybeUninit<T>>,

  #[cfg(all(not(feature = "std"), not(target_has_atomic = "8")))]
  _marker: core::marker::PhantomData<T>,
}

// SAFETY: `value` is written exactly once, by the thread that won the
// UNINIT → INITING transition, and only read after READY is published with
// Release ordering.
#[allow(unsafe_code)]
#[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
unsafe impl<T: Copy + Send + Sync> Sync for OnceCache<T> {}

impl<T: Copy> OnceCache<T> {
  #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
  const UNINIT: u8 = 0;
  #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
  const INITING: u8 = 1;
  #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
  const READY: u8 = 2;

  /// Create a new empty cache.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      #[cfg(feature = "std")]
      inner: std::sync::OnceLock::new(),

      #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
      state: core::sync::atomic::AtomicU8::new(0),
      #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
      value: UnsafeCell::new(MaybeUninit::uninit()),

      #[cfg(all(not(feature = "std"), not(target_has_atomic = "8")))]
      _marker: core::marker::PhantomData,
    }
  }

  /// Get the cached value, initializing with `f` if not yet set.
  #[inline]
  pub fn get_or_init(&self, f: impl FnOnce() -> T) -> T {
    #[cfg(feature = "std")]
    {
      *self.inner.get_or_init(f)
    }

    #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
    {
      use core::sync::atomic::Ordering;

      if self.state.load(Ordering::Acquire) == Self::READY {
        // SAFETY: Value is initialized when state is READY
        #[allow(unsafe_code)]
        return unsafe { (*self.value.get()).assume_init() };
      }

      if self
        .state
        .compare_exchange(Self::UNINIT, Self::INITING, Ordering::AcqRel, Ordering::Acquire)
        .is_ok()
      {
        let value = f();
        // SAFETY: We hold exclusive access during INITING state
        #[allow(unsafe_code)]
        unsafe {
          (*self.value.get()).write(value);
        }
        self.state.store(Self::READY, Ordering::Release);
        return value;
      }

      // Another thread is initializing - spin wait
      while self.state.load(Ordering::Acquire) != Self::READY {
        core::hint::spin_loop();
      }
      // SAFETY: Value is initialized when state is READY
      #[allow(unsafe_code)]
      unsafe {
        (*self.value.get()).assume_init()
      }
    }

    #[cfg(all(not(feature = "std"), not(target_has_atomic = "8")))]
    {
      f()
    }
  }

  /// Returns the cached value if initialization has completed.
  #[inline]
  #[must_use]
  pub fn get(&self) -> Option<T> {
    #[cfg(feature = "std")]
    {
      self.inner.get().copied()
    }

    #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
    {
      use core::sync::atomic::Ordering;

      if self.state.load(Ordering::Acquire) != Self::READY {
        return None;
      }
      // SAFETY: Value is initialized when state is READY
      #[allow(unsafe_code)]
      Some(unsafe { (*self.value.get()).assume_init() })
    }

    #[cfg(all(not(feature = "std"), not(target_has_atomic = "8")))]
    {
      None
    }
  }
}

impl<T: Copy> Default for OnceCache<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Copy> core::fmt::Debug for OnceCache<T> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("OnceCache")
      .field("initialized", &self.get().is_some())
      .finish()
  }
}
