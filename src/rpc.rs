mod application_exception;
mod application_exception_kind;
mod bitcode_struct;
mod rpc_call_error;
mod rpc_client;
mod rpc_client_config;
mod rpc_receiver;
mod rpc_sender;

pub use application_exception::ApplicationException;
pub use application_exception_kind::ApplicationExceptionKind;
pub use bitcode_struct::BitcodeStruct;
pub use rpc_call_error::RpcCallError;
pub use rpc_client::RpcClient;
pub use rpc_client_config::RpcClientConfig;
pub use rpc_receiver::recv;
pub use rpc_sender::send;
