use futures::future::BoxFuture;
use futures::stream::BoxStream;
use futures::StreamExt;
use std::future::Future;
use std::time::Duration;

/// A side effect returned from [`Component::update`](crate::Component::update).
///
/// Commands represent async operations and immediate messages. They are the
/// primary way for a component to perform work that goes beyond pure state
/// updates; the host application executes them and feeds the resulting
/// messages back into `update`.
///
/// # Examples
///
/// ```rust,ignore
/// // Do nothing:
/// let cmd = Command::none();
///
/// // Run an async task and map the result to a message:
/// let cmd = Command::perform(
///     async { fetch_data().await },
///     |data| Msg::DataLoaded(data),
/// );
///
/// // Fire a message every two seconds:
/// let cmd = Command::every(Duration::from_secs(2), |_| Msg::Advance);
/// ```
pub struct Command<Msg: Send + 'static> {
    pub(crate) inner: CommandInner<Msg>,
}

pub(crate) enum CommandInner<Msg: Send + 'static> {
    None,
    Message(Msg),
    Future(BoxFuture<'static, Msg>),
    Stream(BoxStream<'static, Msg>),
    Batch(Vec<Command<Msg>>),
    Sequence(Vec<Command<Msg>>),
}

impl<Msg: Send + 'static> Command<Msg> {
    /// No-op command.
    pub fn none() -> Self {
        Command {
            inner: CommandInner::None,
        }
    }

    /// Send a message immediately.
    pub fn message(msg: Msg) -> Self {
        Command {
            inner: CommandInner::Message(msg),
        }
    }

    /// Run an async future, map the result to a message.
    pub fn perform<F, T>(future: F, map: impl FnOnce(T) -> Msg + Send + 'static) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Command {
            inner: CommandInner::Future(Box::pin(async move { map(future.await) })),
        }
    }

    /// Run a stream, delivering each item as a message.
    pub fn stream(stream: impl futures::Stream<Item = Msg> + Send + 'static) -> Self {
        Command {
            inner: CommandInner::Stream(Box::pin(stream)),
        }
    }

    /// Run multiple commands concurrently.
    pub fn batch(cmds: impl IntoIterator<Item = Command<Msg>>) -> Self {
        let cmds: Vec<_> = cmds.into_iter().collect();
        if cmds.is_empty() {
            return Command::none();
        }
        if cmds.len() == 1 {
            let mut cmds = cmds;
            return cmds.pop().unwrap();
        }
        Command {
            inner: CommandInner::Batch(cmds),
        }
    }

    /// Run commands sequentially: each command's messages are delivered
    /// before the next command starts.
    pub fn sequence(cmds: impl IntoIterator<Item = Command<Msg>>) -> Self {
        let cmds: Vec<_> = cmds.into_iter().collect();
        if cmds.is_empty() {
            return Command::none();
        }
        if cmds.len() == 1 {
            let mut cmds = cmds;
            return cmds.pop().unwrap();
        }
        Command {
            inner: CommandInner::Sequence(cmds),
        }
    }

    /// One-shot timer: fires once after `duration`, mapping the instant to a message.
    pub fn tick(
        duration: Duration,
        map: impl FnOnce(std::time::Instant) -> Msg + Send + 'static,
    ) -> Self {
        Command {
            inner: CommandInner::Future(Box::pin(async move {
                tokio::time::sleep(duration).await;
                map(std::time::Instant::now())
            })),
        }
    }

    /// Repeating timer: fires every `period`, mapping each instant to a message.
    ///
    /// The first fire happens after one full `period` has elapsed. The
    /// interval is created when the stream is first polled, so the command
    /// can be constructed outside a tokio runtime.
    pub fn every(
        period: Duration,
        map: impl Fn(std::time::Instant) -> Msg + Send + 'static,
    ) -> Self {
        let stream = futures::stream::once(async move {
            tokio_stream::wrappers::IntervalStream::new(tokio::time::interval_at(
                tokio::time::Instant::now() + period,
                period,
            ))
        })
        .flatten()
        .map(move |instant| map(instant.into_std()));
        Command {
            inner: CommandInner::Stream(Box::pin(stream)),
        }
    }

    /// Transform the message type (for component composition).
    pub fn map<NewMsg: Send + 'static>(
        self,
        f: impl Fn(Msg) -> NewMsg + Send + Sync + 'static,
    ) -> Command<NewMsg> {
        self.map_with(std::sync::Arc::new(f))
    }

    fn map_with<NewMsg: Send + 'static>(
        self,
        f: std::sync::Arc<dyn Fn(Msg) -> NewMsg + Send + Sync>,
    ) -> Command<NewMsg> {
        match self.inner {
            CommandInner::None => Command::none(),
            CommandInner::Message(msg) => Command::message(f(msg)),
            CommandInner::Future(fut) => {
                let f = f.clone();
                Command {
                    inner: CommandInner::Future(Box::pin(async move { f(fut.await) })),
                }
            }
            CommandInner::Stream(stream) => {
                let f = f.clone();
                Command {
                    inner: CommandInner::Stream(Box::pin(stream.map(move |msg| f(msg)))),
                }
            }
            CommandInner::Batch(cmds) => Command {
                inner: CommandInner::Batch(
                    cmds.into_iter()
                        .map(|cmd| cmd.map_with(f.clone()))
                        .collect(),
                ),
            },
            CommandInner::Sequence(cmds) => Command {
                inner: CommandInner::Sequence(
                    cmds.into_iter()
                        .map(|cmd| cmd.map_with(f.clone()))
                        .collect(),
                ),
            },
        }
    }

    // --- Inspection methods (useful for testing) ---

    /// Returns `true` if this is a no-op command.
    pub fn is_none(&self) -> bool {
        matches!(self.inner, CommandInner::None)
    }

    /// If this command is an immediate message, return it.
    pub fn into_message(self) -> Option<Msg> {
        match self.inner {
            CommandInner::Message(msg) => Some(msg),
            _ => None,
        }
    }

    /// If this command is a batch, return the inner commands.
    pub fn into_batch(self) -> Option<Vec<Command<Msg>>> {
        match self.inner {
            CommandInner::Batch(cmds) => Some(cmds),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_none_is_none() {
        let cmd: Command<()> = Command::none();
        assert!(matches!(cmd.inner, CommandInner::None));
    }

    #[test]
    fn command_message_carries_payload() {
        let cmd: Command<i32> = Command::message(42);
        match cmd.inner {
            CommandInner::Message(msg) => assert_eq!(msg, 42),
            _ => panic!("Expected Message"),
        }
    }

    #[test]
    fn command_batch_empty_returns_none() {
        let cmd: Command<()> = Command::batch(vec![]);
        assert!(matches!(cmd.inner, CommandInner::None));
    }

    #[test]
    fn command_batch_single_unwraps() {
        let cmd: Command<i32> = Command::batch(vec![Command::message(1)]);
        match cmd.inner {
            CommandInner::Message(msg) => assert_eq!(msg, 1),
            _ => panic!("Expected single command unwrapped"),
        }
    }

    #[test]
    fn command_batch_multiple() {
        let cmd: Command<i32> = Command::batch(vec![Command::message(1), Command::message(2)]);
        match cmd.inner {
            CommandInner::Batch(cmds) => assert_eq!(cmds.len(), 2),
            _ => panic!("Expected Batch"),
        }
    }

    #[test]
    fn command_sequence_empty_returns_none() {
        let cmd: Command<()> = Command::sequence(vec![]);
        assert!(matches!(cmd.inner, CommandInner::None));
    }

    #[test]
    fn command_map_none() {
        let cmd: Command<i32> = Command::none();
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        assert!(matches!(mapped.inner, CommandInner::None));
    }

    #[test]
    fn command_map_message() {
        let cmd: Command<i32> = Command::message(42);
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        match mapped.inner {
            CommandInner::Message(s) => assert_eq!(s, "42"),
            _ => panic!("Expected mapped message"),
        }
    }

    #[test]
    fn command_map_batch() {
        let cmd: Command<i32> = Command::batch(vec![Command::message(1), Command::message(2)]);
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        match mapped.inner {
            CommandInner::Batch(cmds) => assert_eq!(cmds.len(), 2),
            _ => panic!("Expected mapped batch"),
        }
    }

    #[test]
    fn command_every_is_stream() {
        let cmd: Command<()> = Command::every(Duration::from_secs(1), |_| ());
        assert!(matches!(cmd.inner, CommandInner::Stream(_)));
    }

    #[test]
    fn command_tick_is_future() {
        let cmd: Command<()> = Command::tick(Duration::from_secs(1), |_| ());
        assert!(matches!(cmd.inner, CommandInner::Future(_)));
    }

    #[test]
    fn into_message_on_non_message_is_none() {
        let cmd: Command<i32> = Command::none();
        assert!(cmd.into_message().is_none());
    }
}
