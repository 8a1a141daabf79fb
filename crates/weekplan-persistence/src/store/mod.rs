pub mod archiver;
pub mod atomic_writer;
pub mod json_task_store;

pub use archiver::Archiver;
pub use atomic_writer::AtomicWriter;
pub use json_task_store::JsonTaskStore;
