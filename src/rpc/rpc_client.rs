use crate::{
    protocol::{InputProtocol, MessageType, OutputProtocol, WireStruct},
    rpc::{RpcCallError, RpcClientConfig, recv, send},
    utils::SequenceCounter,
};
use std::sync::{Mutex, PoisonError};

/// Everything a call needs exclusive access to.
struct ClientChannel<I, O> {
    sequence: SequenceCounter,
    iprot: I,
    oprot: O,
}

/// A blocking RPC client over one shared, message-oriented channel.
///
/// Calls may be issued from many threads (share the client through an
/// `Arc`), but they are served strictly one at a time: the channel lock is
/// taken before a sequence ID is issued and held until the reply has been
/// fully read (or, for one-way calls, until the request has been flushed).
/// No two calls' bytes ever interleave on the channel.
pub struct RpcClient<I, O> {
    channel: Mutex<ClientChannel<I, O>>,
    config: RpcClientConfig,
}

impl<I, O> RpcClient<I, O>
where
    I: InputProtocol,
    O: OutputProtocol,
{
    /// Creates a client from the two halves of a channel. They may wrap the
    /// same duplex stream.
    pub fn new(iprot: I, oprot: O) -> Self {
        Self::with_config(iprot, oprot, RpcClientConfig::default())
    }

    pub fn with_config(iprot: I, oprot: O, config: RpcClientConfig) -> Self {
        Self::with_sequence(iprot, oprot, config, SequenceCounter::new())
    }

    /// Creates a client whose sequence IDs continue from `sequence`.
    pub fn with_sequence(
        iprot: I,
        oprot: O,
        config: RpcClientConfig,
        sequence: SequenceCounter,
    ) -> Self {
        Self {
            channel: Mutex::new(ClientChannel {
                sequence,
                iprot,
                oprot,
            }),
            config,
        }
    }

    pub fn config(&self) -> &RpcClientConfig {
        &self.config
    }

    /// Performs one call.
    ///
    /// With `result` present, the request is sent and the matching reply is
    /// read into `result`. With `result` absent the call is one-way: it
    /// returns as soon as the request has been flushed and never reads from
    /// the channel.
    pub fn call(
        &self,
        method: &str,
        args: &dyn WireStruct,
        result: Option<&mut dyn WireStruct>,
    ) -> Result<(), RpcCallError> {
        // Dropping the guard is the only release; every return below goes
        // through it exactly once.
        let mut channel = self.channel.lock().map_err(|_| {
            tracing::error!("Channel lock poisoned; refusing call to `{}`", method);
            RpcCallError::ChannelPoisoned
        })?;
        let ClientChannel {
            sequence,
            iprot,
            oprot,
        } = &mut *channel;

        let seq_id = sequence.next_id();
        let message_type = match (&result, self.config.oneway_message_type) {
            (None, true) => MessageType::Oneway,
            _ => MessageType::Call,
        };

        tracing::trace!("Sending `{}` (seq {}, {:?})", method, seq_id, message_type);
        send(oprot, seq_id, method, message_type, args)?;

        let Some(result) = result else {
            return Ok(());
        };

        recv(iprot, seq_id, method, result)?;
        tracing::trace!("Completed `{}` (seq {})", method, seq_id);

        Ok(())
    }

    /// Two-way call that returns a freshly decoded result.
    pub fn call_two_way<R>(&self, method: &str, args: &dyn WireStruct) -> Result<R, RpcCallError>
    where
        R: WireStruct + Default,
    {
        let mut result = R::default();
        self.call(method, args, Some(&mut result))?;
        Ok(result)
    }

    /// One-way call; no reply is awaited.
    pub fn call_oneway(&self, method: &str, args: &dyn WireStruct) -> Result<(), RpcCallError> {
        self.call(method, args, None)
    }

    /// The most recently issued sequence ID.
    pub fn last_seq_id(&self) -> Result<i32, RpcCallError> {
        let channel = self
            .channel
            .lock()
            .map_err(|_| RpcCallError::ChannelPoisoned)?;
        Ok(channel.sequence.current())
    }

    /// Tears the client down, handing back both halves of the channel.
    ///
    /// A poisoned lock still yields the protocols; the caller decides whether
    /// they are worth salvaging.
    pub fn into_inner(self) -> (I, O) {
        let channel = self
            .channel
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        (channel.iprot, channel.oprot)
    }
}
