#![allow(dead_code)]

use example_seqrpc_service_definition::{
    Add, AddArgs, AddResult, Echo, EchoArgs, EchoResult, Ping, PingArgs, PingResult,
};
use seqrpc::protocol::{
    BinaryInputProtocol, BinaryOutputProtocol, FieldType, InputProtocol, MessageType,
    OutputProtocol, ProtocolError, WireStruct,
};
use seqrpc::rpc::{
    ApplicationException, ApplicationExceptionKind, BitcodeStruct, RpcClient, RpcClientConfig,
};
use std::io::{self, BufReader, BufWriter, Cursor};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

pub const CONCAT_METHOD_NAME: &str = "concat";

pub type TcpClient =
    RpcClient<BinaryInputProtocol<BufReader<TcpStream>>, BinaryOutputProtocol<BufWriter<TcpStream>>>;

pub type MemoryClient = RpcClient<BinaryInputProtocol<Cursor<Vec<u8>>>, BinaryOutputProtocol<Vec<u8>>>;

/// Encodes one complete message the way a peer would put it on the wire.
pub fn encode_message(
    name: &str,
    message_type: MessageType,
    seq_id: i32,
    body: &dyn WireStruct,
) -> Vec<u8> {
    let mut oprot = BinaryOutputProtocol::new(Vec::new());
    oprot
        .write_message_begin(name, message_type, seq_id)
        .expect("write header");
    body.write(&mut oprot).expect("write body");
    oprot.write_message_end().expect("write end");
    oprot.into_inner()
}

/// A client whose inbound side replays `inbound` and whose outbound side
/// records everything written.
pub fn memory_client(inbound: Vec<u8>) -> MemoryClient {
    memory_client_with_config(inbound, RpcClientConfig::default())
}

pub fn memory_client_with_config(inbound: Vec<u8>, config: RpcClientConfig) -> MemoryClient {
    RpcClient::with_config(
        BinaryInputProtocol::new(Cursor::new(inbound)),
        BinaryOutputProtocol::new(Vec::new()),
        config,
    )
}

/// Connects a client to a peer thread serving `add`, `echo`, `ping` and
/// `concat`. The join handle yields every sequence ID the peer received, in
/// arrival order, once the client is dropped.
pub fn spawn_loopback_pair(config: RpcClientConfig) -> (TcpClient, JoinHandle<Vec<i32>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener address");

    let server = thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept client");
        serve_connection(stream)
    });

    let stream = TcpStream::connect(addr).expect("connect to loopback peer");
    stream.set_nodelay(true).expect("set nodelay");
    let reader = BufReader::new(stream.try_clone().expect("clone stream"));
    let writer = BufWriter::new(stream);

    let client = RpcClient::with_config(
        BinaryInputProtocol::new(reader),
        BinaryOutputProtocol::new(writer),
        config,
    );

    (client, server)
}

fn serve_connection(stream: TcpStream) -> Vec<i32> {
    let mut iprot = BinaryInputProtocol::new(BufReader::new(stream.try_clone().expect("clone")));
    let mut oprot = BinaryOutputProtocol::new(BufWriter::new(stream));
    let mut seen = Vec::new();

    loop {
        let header = match iprot.read_message_begin() {
            Ok(header) => header,
            Err(ProtocolError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(e) => panic!("peer failed to read message header: {}", e),
        };
        seen.push(header.seq_id);

        let (reply_type, body): (MessageType, Box<dyn WireStruct>) = match header.name.as_str() {
            Add::METHOD_NAME => {
                let mut args = AddArgs::default();
                args.read(&mut iprot).expect("read add args");
                let value = args.a.wrapping_add(args.b);
                (MessageType::Reply, Box::new(AddResult { value }))
            }
            Echo::METHOD_NAME => {
                let mut args = EchoArgs::default();
                args.read(&mut iprot).expect("read echo args");
                let payload = args.payload;
                (MessageType::Reply, Box::new(EchoResult { payload }))
            }
            Ping::METHOD_NAME => {
                PingArgs.read(&mut iprot).expect("read ping args");
                (MessageType::Reply, Box::new(PingResult))
            }
            CONCAT_METHOD_NAME => {
                let mut args = BitcodeStruct::<Vec<String>>::default();
                args.read(&mut iprot).expect("read concat args");
                let joined = args.value.concat();
                (MessageType::Reply, Box::new(BitcodeStruct::new(joined)))
            }
            other => {
                iprot.skip(FieldType::Struct).expect("skip unknown args");
                let exception = ApplicationException::new(
                    ApplicationExceptionKind::UnknownMethod,
                    format!("Unknown method {}", other),
                );
                (MessageType::Exception, Box::new(exception))
            }
        };
        iprot.read_message_end().expect("read message end");

        if header.message_type == MessageType::Oneway {
            continue;
        }

        oprot
            .write_message_begin(&header.name, reply_type, header.seq_id)
            .expect("write reply header");
        body.write(&mut oprot).expect("write reply body");
        oprot.write_message_end().expect("write reply end");
        oprot.flush().expect("flush reply");
    }

    seen
}
