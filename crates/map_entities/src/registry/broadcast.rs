use std::sync::mpsc::{channel, Receiver, Sender};

/// In-process multicast fan-out. Emission is synchronous and in order;
/// subscribers that join late miss earlier emissions. Dropping the receiver
/// is how a subscriber cancels: the dead sender is pruned on the next emit.
#[derive(Debug)]
pub struct Multicast<T> {
    senders: Vec<Sender<T>>,
}

impl<T> Default for Multicast<T> {
    fn default() -> Self {
        Self {
            senders: Vec::new(),
        }
    }
}

impl<T: Clone> Multicast<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> Receiver<T> {
        let (sender, receiver) = channel();
        self.senders.push(sender);
        receiver
    }

    pub fn emit(&mut self, value: T) {
        self.senders
            .retain(|sender| sender.send(value.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.senders.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subscriber_receives_each_emission_in_order() {
        let mut channel = Multicast::new();
        let first = channel.subscribe();
        let second = channel.subscribe();

        channel.emit(1u32);
        channel.emit(2u32);

        assert_eq!(first.try_iter().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(second.try_iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn late_subscriber_misses_prior_emissions() {
        let mut channel = Multicast::new();
        channel.emit(1u32);
        let late = channel.subscribe();
        channel.emit(2u32);
        assert_eq!(late.try_iter().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn dropped_receiver_is_pruned_on_next_emit() {
        let mut channel = Multicast::new();
        let kept = channel.subscribe();
        {
            let dropped = channel.subscribe();
            drop(dropped);
        }
        assert_eq!(channel.subscriber_count(), 2);
        channel.emit(7u32);
        assert_eq!(channel.subscriber_count(), 1);
        assert_eq!(kept.try_iter().collect::<Vec<_>>(), vec![7]);
    }
}
