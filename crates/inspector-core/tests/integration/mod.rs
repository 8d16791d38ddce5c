mod fetch;
mod inspector;
mod whois_client;
