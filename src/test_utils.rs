//! Test helpers shared by unit tests

use std::cell::{Cell, RefCell};

use crate::pactl::{PactlError, SoundServer};

/// In-memory sound server built from a list of `(id, description)` pairs.
///
/// Renders the same text shapes `pactl` prints, so the real parsers run against it.
/// `set_default_sink` updates the stored default, which lets tests toggle repeatedly.
pub(crate) struct FakeServer {
    default: RefCell<Option<String>>,
    sinks: Vec<(String, Option<String>)>,
    fail_query: bool,
    fail_listing: bool,
    fail_detailed: bool,
    fail_set: bool,
    detailed_calls: Cell<usize>,
    set_calls: RefCell<Vec<String>>,
}

impl FakeServer {
    /// Create a server with the given default sink and sinks in listing order.
    ///
    /// A `None` description leaves the `Description:` line out of the verbose record.
    #[must_use]
    pub fn new(default: Option<&str>, sinks: &[(&str, Option<&str>)]) -> Self {
        Self {
            default: RefCell::new(default.map(String::from)),
            sinks: sinks
                .iter()
                .map(|(id, desc)| ((*id).to_string(), desc.map(String::from)))
                .collect(),
            fail_query: false,
            fail_listing: false,
            fail_detailed: false,
            fail_set: false,
            detailed_calls: Cell::new(0),
            set_calls: RefCell::new(Vec::new()),
        }
    }

    /// Make `get-default-sink` fail
    #[must_use]
    pub fn failing_query(mut self) -> Self {
        self.fail_query = true;
        self
    }

    /// Make the short listing fail
    #[must_use]
    pub fn failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    /// Make the detailed listing fail
    #[must_use]
    pub fn failing_detailed(mut self) -> Self {
        self.fail_detailed = true;
        self
    }

    /// Make `set-default-sink` fail
    #[must_use]
    pub fn failing_set(mut self) -> Self {
        self.fail_set = true;
        self
    }

    /// Current default as seen by the server
    pub fn current(&self) -> Option<String> {
        self.default.borrow().clone()
    }

    /// Ids passed to `set_default_sink`, in call order
    pub fn set_calls(&self) -> Vec<String> {
        self.set_calls.borrow().clone()
    }

    /// Number of detailed listings served
    pub fn detailed_calls(&self) -> usize {
        self.detailed_calls.get()
    }

    fn failure(command: &str) -> PactlError {
        PactlError::Spawn {
            command: format!("pactl {command}"),
            source: std::io::Error::other("connection refused"),
        }
    }
}

impl SoundServer for FakeServer {
    fn default_sink(&self) -> Result<String, PactlError> {
        if self.fail_query {
            return Err(Self::failure("get-default-sink"));
        }
        Ok(format!("{}\n", self.current().unwrap_or_default()))
    }

    fn list_sinks_short(&self) -> Result<String, PactlError> {
        if self.fail_listing {
            return Err(Self::failure("list short sinks"));
        }
        Ok(self
            .sinks
            .iter()
            .enumerate()
            .map(|(i, (id, _))| format!("{}\t{id}\tPipeWire\ts32le 2ch 48000Hz\tIDLE\n", 40 + i))
            .collect())
    }

    fn list_sinks_detailed(&self) -> Result<String, PactlError> {
        self.detailed_calls.set(self.detailed_calls.get() + 1);
        if self.fail_detailed {
            return Err(Self::failure("list sinks"));
        }

        let mut out = String::new();
        for (i, (id, desc)) in self.sinks.iter().enumerate() {
            out.push_str(&format!("Sink #{}\n\tState: IDLE\n\tName: {id}\n", 40 + i));
            if let Some(desc) = desc {
                out.push_str(&format!("\tDescription: {desc}\n"));
            }
            out.push_str("\tDriver: PipeWire\n\n");
        }
        Ok(out)
    }

    fn set_default_sink(&self, id: &str) -> Result<(), PactlError> {
        self.set_calls.borrow_mut().push(id.to_string());
        if self.fail_set {
            return Err(PactlError::Spawn {
                command: format!("pactl set-default-sink {id}"),
                source: std::io::Error::other("No such entity"),
            });
        }
        *self.default.borrow_mut() = Some(id.to_string());
        Ok(())
    }
}
