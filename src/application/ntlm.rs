//! NTLM message codec
//!
//! Implements the client side of the three-message NTLM handshake used by
//! on-premises SharePoint:
//! 1. Client sends a NEGOTIATE (type 1) message
//! 2. Server answers 401 with a CHALLENGE (type 2) message
//! 3. Client replays the request with an AUTHENTICATE (type 3) message
//!
//! Responses are NTLMv2 (HMAC-MD5 over the NTOWFv2 hash).

use crate::application::config::Credentials;
use crate::error::AppError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use md4::{Digest, Md4};
use md5::Md5;

type HmacMd5 = Hmac<Md5>;

const SIGNATURE: &[u8; 8] = b"NTLMSSP\0";

const NEGOTIATE_UNICODE: u32 = 0x0000_0001;
const NEGOTIATE_OEM: u32 = 0x0000_0002;
const REQUEST_TARGET: u32 = 0x0000_0004;
const NEGOTIATE_NTLM: u32 = 0x0000_0200;
const NEGOTIATE_ALWAYS_SIGN: u32 = 0x0000_8000;
const NEGOTIATE_EXTENDED_SESSIONSECURITY: u32 = 0x0008_0000;
const NEGOTIATE_TARGET_INFO: u32 = 0x0080_0000;
const NEGOTIATE_128: u32 = 0x2000_0000;
const NEGOTIATE_56: u32 = 0x8000_0000;

const NEGOTIATE_FLAGS: u32 = NEGOTIATE_UNICODE
    | NEGOTIATE_OEM
    | REQUEST_TARGET
    | NEGOTIATE_NTLM
    | NEGOTIATE_ALWAYS_SIGN
    | NEGOTIATE_EXTENDED_SESSIONSECURITY
    | NEGOTIATE_128
    | NEGOTIATE_56;

const AUTHENTICATE_FLAGS: u32 = NEGOTIATE_UNICODE
    | NEGOTIATE_NTLM
    | NEGOTIATE_ALWAYS_SIGN
    | NEGOTIATE_EXTENDED_SESSIONSECURITY
    | NEGOTIATE_TARGET_INFO
    | NEGOTIATE_128
    | NEGOTIATE_56;

/// Seconds between 1601-01-01 and 1970-01-01
const FILETIME_EPOCH_OFFSET: u64 = 11_644_473_600;

/// Fields of a server CHALLENGE message the client needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    /// Flags negotiated by the server
    pub flags: u32,
    /// 8 byte server challenge
    pub server_challenge: [u8; 8],
    /// AV pairs echoed back inside the NTLMv2 blob
    pub target_info: Vec<u8>,
}

impl Challenge {
    /// Parses a raw type 2 message
    pub fn parse(message: &[u8]) -> Result<Self, AppError> {
        if message.len() < 32 {
            return Err(AppError::Ntlm("challenge message too short".to_string()));
        }
        if &message[..8] != SIGNATURE {
            return Err(AppError::Ntlm("bad challenge signature".to_string()));
        }
        if read_u32(message, 8) != 2 {
            return Err(AppError::Ntlm("not a challenge message".to_string()));
        }

        let flags = read_u32(message, 20);
        let mut server_challenge = [0u8; 8];
        server_challenge.copy_from_slice(&message[24..32]);

        let mut target_info = Vec::new();
        if message.len() >= 48 {
            let len = read_u16(message, 40) as usize;
            let offset = read_u32(message, 44) as usize;
            let end = offset
                .checked_add(len)
                .ok_or_else(|| AppError::Ntlm("target info overflows".to_string()))?;
            if end > message.len() {
                return Err(AppError::Ntlm("target info out of bounds".to_string()));
            }
            target_info.extend_from_slice(&message[offset..end]);
        }

        Ok(Self {
            flags,
            server_challenge,
            target_info,
        })
    }
}

/// NTLM credentials and message builder for one site
#[derive(Clone)]
pub struct NtlmAuth {
    domain: String,
    login: String,
    password: String,
    workstation: String,
}

impl NtlmAuth {
    /// Creates the handshake state from the configured credentials
    pub fn new(credentials: &Credentials) -> Self {
        let workstation = std::env::var("COMPUTERNAME")
            .or_else(|_| std::env::var("HOSTNAME"))
            .unwrap_or_else(|_| "WORKSTATION".to_string())
            .to_uppercase();

        Self {
            domain: credentials.domain.clone(),
            login: credentials.login.clone(),
            password: credentials.password.clone(),
            workstation,
        }
    }

    /// `Authorization` value carrying the NEGOTIATE message
    #[must_use]
    pub fn negotiate_header(&self) -> String {
        format!("NTLM {}", STANDARD.encode(negotiate_message()))
    }

    /// `Authorization` value answering the base64 `challenge` from `WWW-Authenticate`
    pub fn authenticate_header(&self, challenge: &str) -> Result<String, AppError> {
        let raw = STANDARD
            .decode(challenge.trim())
            .map_err(|e| AppError::Ntlm(format!("failed to decode challenge: {e}")))?;
        let challenge = Challenge::parse(&raw)?;
        let client_challenge: [u8; 8] = rand::random();
        let message = self.authenticate_message(&challenge, client_challenge, filetime_now())?;
        Ok(format!("NTLM {}", STANDARD.encode(message)))
    }

    /// Builds the AUTHENTICATE message for a parsed challenge
    pub fn authenticate_message(
        &self,
        challenge: &Challenge,
        client_challenge: [u8; 8],
        timestamp: u64,
    ) -> Result<Vec<u8>, AppError> {
        let response_key = nt_owf_v2(&self.login, &self.domain, &self.password);

        let mut blob = Vec::with_capacity(32 + challenge.target_info.len());
        blob.extend_from_slice(&[0x01, 0x01, 0x00, 0x00]);
        blob.extend_from_slice(&[0x00; 4]);
        blob.extend_from_slice(&timestamp.to_le_bytes());
        blob.extend_from_slice(&client_challenge);
        blob.extend_from_slice(&[0x00; 4]);
        blob.extend_from_slice(&challenge.target_info);
        blob.extend_from_slice(&[0x00; 4]);

        let mut proof_input = Vec::with_capacity(8 + blob.len());
        proof_input.extend_from_slice(&challenge.server_challenge);
        proof_input.extend_from_slice(&blob);
        let nt_proof = hmac_md5(&response_key, &proof_input)?;

        let mut nt_response = nt_proof.to_vec();
        nt_response.extend_from_slice(&blob);

        let lm_response =
            lmv2_response(&response_key, &challenge.server_challenge, &client_challenge)?;

        let domain = utf16le(&self.domain);
        let user = utf16le(&self.login);
        let workstation = utf16le(&self.workstation);

        let fields: [&[u8]; 5] = [&lm_response, &nt_response, &domain, &user, &workstation];

        let mut message = Vec::with_capacity(64 + fields.iter().map(|f| f.len()).sum::<usize>());
        message.extend_from_slice(SIGNATURE);
        message.extend_from_slice(&3u32.to_le_bytes());

        let mut offset: u32 = 64;
        for field in fields {
            let len = u16::try_from(field.len())
                .map_err(|_| AppError::Ntlm("authenticate field too long".to_string()))?;
            write_security_buffer(&mut message, len, offset);
            offset += u32::from(len);
        }
        // Empty encrypted random session key
        write_security_buffer(&mut message, 0, offset);
        message.extend_from_slice(&AUTHENTICATE_FLAGS.to_le_bytes());

        for field in fields {
            message.extend_from_slice(field);
        }
        Ok(message)
    }
}

/// Builds the NEGOTIATE message
#[must_use]
pub fn negotiate_message() -> Vec<u8> {
    let mut message = Vec::with_capacity(32);
    message.extend_from_slice(SIGNATURE);
    message.extend_from_slice(&1u32.to_le_bytes());
    message.extend_from_slice(&NEGOTIATE_FLAGS.to_le_bytes());
    // Domain and workstation are not supplied
    write_security_buffer(&mut message, 0, 0);
    write_security_buffer(&mut message, 0, 0);
    message
}

/// NTOWFv1: MD4 of the UTF-16LE password
#[must_use]
pub fn nt_owf_v1(password: &str) -> [u8; 16] {
    let digest = Md4::digest(utf16le(password));
    let mut out = [0u8; 16];
    out.copy_from_slice(&digest);
    out
}

/// NTOWFv2: HMAC-MD5 keyed by NTOWFv1 over UPPER(user) + domain
#[must_use]
pub fn nt_owf_v2(login: &str, domain: &str, password: &str) -> [u8; 16] {
    let identity = utf16le(&format!("{}{}", login.to_uppercase(), domain));
    // HMAC accepts keys of any length
    hmac_md5(&nt_owf_v1(password), &identity).unwrap_or_default()
}

/// LMv2 response: HMAC-MD5(key, server || client) followed by the client challenge
pub fn lmv2_response(
    response_key: &[u8; 16],
    server_challenge: &[u8; 8],
    client_challenge: &[u8; 8],
) -> Result<Vec<u8>, AppError> {
    let mut input = [0u8; 16];
    input[..8].copy_from_slice(server_challenge);
    input[8..].copy_from_slice(client_challenge);
    let mut response = hmac_md5(response_key, &input)?.to_vec();
    response.extend_from_slice(client_challenge);
    Ok(response)
}

fn hmac_md5(key: &[u8], data: &[u8]) -> Result<[u8; 16], AppError> {
    let mut mac =
        HmacMd5::new_from_slice(key).map_err(|e| AppError::Ntlm(format!("hmac error: {e}")))?;
    mac.update(data);
    let mut out = [0u8; 16];
    out.copy_from_slice(&mac.finalize().into_bytes());
    Ok(out)
}

fn utf16le(value: &str) -> Vec<u8> {
    value.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

fn write_security_buffer(message: &mut Vec<u8>, len: u16, offset: u32) {
    message.extend_from_slice(&len.to_le_bytes());
    message.extend_from_slice(&len.to_le_bytes());
    message.extend_from_slice(&offset.to_le_bytes());
}

fn read_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

/// Current time as a Windows FILETIME (100 ns ticks since 1601-01-01)
fn filetime_now() -> u64 {
    let now = Utc::now();
    let secs = now.timestamp().max(0) as u64 + FILETIME_EPOCH_OFFSET;
    secs * 10_000_000 + u64::from(now.timestamp_subsec_nanos() / 100)
}
