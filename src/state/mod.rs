pub(crate) mod pending;

pub(crate) use pending::PendingQueue;
