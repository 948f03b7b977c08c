mod external_communicator;
mod key;
mod key_queue;
mod key_report;

pub use external_communicator::ExternalCommunicator;
pub use key::{Key, Modifiers};
pub use key_queue::KeyQueue;
pub use key_report::KeyReport;
