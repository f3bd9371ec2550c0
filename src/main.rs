use clap::{arg, crate_version, Command};
use lzwcodec::codecs::{ascii_codec, binary_codec, uri_codec, utf16_codec};

const RCH: &str = "unreachable was reached";

fn write_u8(path: &str, syms: &[u8]) -> std::io::Result<()> {
    std::fs::write(path, syms)
}

fn read_u8(path: &str) -> std::io::Result<Vec<u8>> {
    std::fs::read(path)
}

fn write_u32(path: &str, syms: &[u32]) -> std::io::Result<()> {
    let mut bytes = Vec::with_capacity(syms.len() * 4);
    for &s in syms {
        bytes.extend_from_slice(&s.to_le_bytes());
    }
    std::fs::write(path, bytes)
}

fn read_u32(path: &str) -> Result<Vec<u32>, Box<dyn std::error::Error>> {
    let bytes = std::fs::read(path)?;
    if bytes.len() % 4 != 0 {
        return Err("input length is not a multiple of 4 bytes".into());
    }
    Ok(bytes.chunks_exact(4).map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]])).collect())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let long_help = "Examples:
---------
Encode:        `lzwcodec encode -c binary -i my_input -o my_packed`
Decode:        `lzwcodec decode -c binary -i my_packed -o my_output`";

    let codecs = ["binary", "ascii", "utf16", "uri"];

    let mut main_cmd = Command::new("lzwcodec")
        .about("Encode and decode with a generic LZW codec")
        .after_long_help(long_help)
        .version(crate_version!());
    main_cmd = main_cmd.subcommand(
        Command::new("encode")
            .arg(arg!(-c --codec <CODEC> "predefined codec").value_parser(codecs).required(true))
            .arg(arg!(-i --input <PATH> "input path").required(true))
            .arg(arg!(-o --output <PATH> "output path").required(true))
            .about("LZW-encode a file and pack the result"),
    );
    main_cmd = main_cmd.subcommand(
        Command::new("decode")
            .arg(arg!(-c --codec <CODEC> "predefined codec").value_parser(codecs).required(true))
            .arg(arg!(-i --input <PATH> "input path").required(true))
            .arg(arg!(-o --output <PATH> "output path").required(true))
            .about("unpack a file and LZW-decode the result"),
    );

    let matches = main_cmd.get_matches();

    if let Some(cmd) = matches.subcommand_matches("encode") {
        let path_in = cmd.get_one::<String>("input").expect(RCH);
        let path_out = cmd.get_one::<String>("output").expect(RCH);
        let codec = cmd.get_one::<String>("codec").expect(RCH);
        match codec.as_str() {
            "binary" => {
                let dat = read_u8(path_in)?;
                let packed = binary_codec().encode_slice(&dat)?;
                write_u8(path_out, &packed)?;
            }
            "ascii" => {
                let dat = read_u8(path_in)?;
                let packed = ascii_codec().encode_slice(&dat)?;
                write_u8(path_out, &packed)?;
            }
            "uri" => {
                let dat = read_u8(path_in)?;
                let packed = uri_codec().encode_slice(&dat)?;
                write_u8(path_out, &packed)?;
            }
            "utf16" => {
                let dat = read_u8(path_in)?;
                let packed = utf16_codec().encode_slice(&dat)?;
                write_u32(path_out, &packed)?;
            }
            _ => {
                eprintln!("{} not supported", codec);
                return Err(Box::new(std::fmt::Error));
            }
        }
    }

    if let Some(cmd) = matches.subcommand_matches("decode") {
        let path_in = cmd.get_one::<String>("input").expect(RCH);
        let path_out = cmd.get_one::<String>("output").expect(RCH);
        let codec = cmd.get_one::<String>("codec").expect(RCH);
        match codec.as_str() {
            "binary" => {
                let dat = read_u8(path_in)?;
                let restored = binary_codec().decode_slice(&dat)?;
                write_u8(path_out, &restored)?;
            }
            "ascii" => {
                let dat = read_u8(path_in)?;
                let restored = ascii_codec().decode_slice(&dat)?;
                write_u8(path_out, &restored)?;
            }
            "uri" => {
                let dat = read_u8(path_in)?;
                let restored = uri_codec().decode_slice(&dat)?;
                write_u8(path_out, &restored)?;
            }
            "utf16" => {
                let dat = read_u32(path_in)?;
                let restored = utf16_codec().decode_slice(&dat)?;
                write_u8(path_out, &restored)?;
            }
            _ => {
                eprintln!("{} not supported", codec);
                return Err(Box::new(std::fmt::Error));
            }
        }
    }

    Ok(())
}
