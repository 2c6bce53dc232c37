/******************************************************************************
   Author: easy-sharepoint contributors
   Date: 16/10/26
******************************************************************************/
/// HTTP verbs, headers and the NTLM request helper
pub mod http;
/// OData envelope builders
pub mod payload;
/// Request settings for list, column and file operations
pub mod requests;
/// Response models and OData unwrapping
pub mod responses;
