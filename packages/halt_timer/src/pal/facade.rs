use std::fmt::Debug;
#[cfg(test)]
use std::sync::{Arc, Mutex};
use std::time::Instant;

#[cfg(test)]
use crate::pal::{FakeTimeSource, MockTimeSource};
use crate::pal::{RealTimeSource, TimeSource};

#[derive(Clone)]
pub(crate) enum TimeSourceFacade {
    Real(RealTimeSource),

    #[cfg(test)]
    Fake(FakeTimeSource),

    #[cfg(test)]
    Mock(Arc<Mutex<MockTimeSource>>),
}

impl TimeSourceFacade {
    pub(crate) const fn real() -> Self {
        Self::Real(RealTimeSource)
    }
}

impl TimeSource for TimeSourceFacade {
    fn now(&self) -> Instant {
        match self {
            Self::Real(source) => source.now(),
            #[cfg(test)]
            Self::Fake(source) => source.now(),
            #[cfg(test)]
            Self::Mock(source) => source
                .lock()
                .expect("mock time source does not support operation after panic in mock")
                .now(),
        }
    }
}

impl From<RealTimeSource> for TimeSourceFacade {
    fn from(source: RealTimeSource) -> Self {
        Self::Real(source)
    }
}

#[cfg(test)]
impl From<FakeTimeSource> for TimeSourceFacade {
    fn from(source: FakeTimeSource) -> Self {
        Self::Fake(source)
    }
}

#[cfg(test)]
impl From<MockTimeSource> for TimeSourceFacade {
    fn from(source: MockTimeSource) -> Self {
        Self::Mock(Arc::new(Mutex::new(source)))
    }
}

impl Debug for TimeSourceFacade {
    #[cfg_attr(test, mutants::skip)] // Debug output format is not part of the API contract.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(source) => source.fmt(f),
            #[cfg(test)]
            Self::Fake(source) => source.fmt(f),
            #[cfg(test)]
            Self::Mock(source) => source.fmt(f),
        }
    }
}
