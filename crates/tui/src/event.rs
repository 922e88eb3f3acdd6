use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEvent};
use log::{debug, error};
use std::cell::RefCell;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::navigator::BusNavigator;

/// An event our app may receive
#[derive(Debug)]
pub enum Event {
    /// Key press.
    Key(KeyEvent),

    /// Mouse click/scroll.
    Mouse(MouseEvent),

    /// Terminal resize.
    Resize(u16, u16),

    /// A request to change the active route, sent by a clicked card.
    Navigate(String),
}

/// The event bus aggregates events from multiple threads, and joins them all back when dropped.
#[derive(Debug)]
pub struct EventBus {
    sender: mpsc::Sender<Event>,
    receiver: mpsc::Receiver<Event>,
    running: Arc<AtomicBool>,
    handles: RefCell<Vec<thread::JoinHandle<()>>>,
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            running: Arc::new(AtomicBool::new(true)),
            handles: Default::default(),
        }
    }

    /// Receive the next event from the handler thread.
    ///
    /// This function will always block the current thread if
    /// there is no data available and it's possible for more data to be sent.
    pub fn next(&self) -> Result<Event> {
        Ok(self.receiver.recv()?)
    }

    /// A navigator which posts route changes to this bus
    pub fn navigator(&self) -> BusNavigator {
        BusNavigator::new(self.sender.clone())
    }

    /// Spawn a new thread that can publish to this event bus
    pub fn spawn<F>(&self, name: impl ToString, f: F) -> io::Result<()>
    where
        F: 'static + Send + FnOnce(Arc<AtomicBool>, Sender<Event>),
    {
        let sender = self.sender.clone();
        let running = self.running.clone();
        let handle = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || f(running, sender))?;
        self.handles.borrow_mut().push(handle);

        Ok(())
    }

    /// Spawn a thread to publish terminal events to this bus
    pub fn spawn_terminal_listener(&self) -> io::Result<()> {
        self.spawn("terminal_events", Self::terminal_events)
    }

    /// Polls for terminal events and sends them to the given sender.
    fn terminal_events(running: Arc<AtomicBool>, sender: Sender<Event>) {
        while running.load(Ordering::Relaxed) {
            let ready = match event::poll(Duration::from_millis(250)) {
                Ok(r) => r,
                Err(e) => {
                    error!("unable to poll for events: {}", e);
                    break;
                }
            };
            if !ready {
                continue;
            }

            let sent = match event::read() {
                Ok(CrosstermEvent::Key(e)) => sender.send(Event::Key(e)),
                Ok(CrosstermEvent::Mouse(e)) => sender.send(Event::Mouse(e)),
                Ok(CrosstermEvent::Resize(w, h)) => sender.send(Event::Resize(w, h)),
                Ok(_) => Ok(()),
                Err(e) => {
                    error!("unable to read event: {}", e);
                    break;
                }
            };
            if sent.is_err() {
                debug!("event bus closed");
                break;
            }
        }
    }
}

impl Drop for EventBus {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        self.handles.borrow_mut().drain(..).for_each(|h| {
            debug!("joining thread {:?}", h.thread().name());
            if h.join().is_err() {
                error!("thread panicked");
            }
        });
    }
}
