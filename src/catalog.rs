//! Static tool catalog.
//!
//! Configuration data, not engineering: every tool here is a thin
//! declaration over the generic translator. Descriptions and filter keys
//! mirror the NetBox API. Search tools get a `limit` parameter implicitly.

use crate::registry::{DetailSpec, ParamSpec, ParamType, ToolDescriptor, ToolRegistry};

fn str_p(name: &'static str, description: &'static str) -> ParamSpec {
    ParamSpec::exact(name, ParamType::String, description)
}

fn int_p(name: &'static str, description: &'static str) -> ParamSpec {
    ParamSpec::exact(name, ParamType::Integer, description)
}

fn bool_p(name: &'static str, description: &'static str) -> ParamSpec {
    ParamSpec::exact(name, ParamType::Boolean, description)
}

fn detail(
    endpoint: &'static str,
    id_param: &'static str,
    natural_keys: &'static [&'static str],
) -> DetailSpec {
    DetailSpec {
        endpoint,
        id_param,
        natural_keys,
        subresource: None,
    }
}

/// Build the full registry. Fails only on a duplicate tool name, which is a
/// startup error.
pub fn build_registry() -> Result<ToolRegistry, String> {
    ToolRegistry::from_descriptors(descriptors())
}

fn descriptors() -> Vec<ToolDescriptor> {
    vec![
        // ------------------------------------------------------------------
        // dcim
        // ------------------------------------------------------------------
        ToolDescriptor::search(
            "search_devices",
            "Search for devices in NetBox",
            "dcim/devices",
            vec![
                ParamSpec::partial("name", "Device name (partial match)"),
                str_p("site", "Site name"),
                str_p("device_type", "Device type"),
                str_p("role", "Device role"),
                str_p("status", "Device status"),
            ],
        ),
        ToolDescriptor::detail(
            "get_device_details",
            "Get detailed information about a specific device",
            detail("dcim/devices", "device_id", &["device_name"]),
            vec![
                int_p("device_id", "NetBox device ID"),
                str_p("device_name", "Device name (alternative to ID)").with_filter_key("name"),
            ],
        ),
        ToolDescriptor::search(
            "get_device_interfaces",
            "Get interfaces for a specific device",
            "dcim/interfaces",
            vec![
                int_p("device_id", "NetBox device ID"),
                ParamSpec::related(
                    "device_name",
                    "Device name (alternative to ID)",
                    "dcim/devices",
                    "name",
                    "device_id",
                ),
                str_p("interface_type", "Filter by interface type").with_filter_key("type"),
                bool_p("enabled", "Filter by enabled status"),
            ],
        ),
        ToolDescriptor::search(
            "get_sites",
            "List all sites in NetBox",
            "dcim/sites",
            vec![
                ParamSpec::partial("name", "Site name filter"),
                str_p("region", "Region filter"),
            ],
        ),
        ToolDescriptor::detail(
            "get_site_details",
            "Get detailed information about a specific site",
            detail("dcim/sites", "site_id", &["site_name"]),
            vec![
                int_p("site_id", "NetBox site ID"),
                str_p("site_name", "Site name (alternative to ID)").with_filter_key("name"),
            ],
        ),
        ToolDescriptor::search(
            "search_racks",
            "Search for equipment racks",
            "dcim/racks",
            vec![
                ParamSpec::partial("name", "Rack name (partial match)"),
                str_p("site", "Site name"),
                str_p("location", "Location within site"),
                str_p("status", "Rack status"),
            ],
        ),
        ToolDescriptor::detail(
            "get_rack_details",
            "Get detailed information about a specific rack",
            detail("dcim/racks", "rack_id", &["rack_name"]),
            vec![
                int_p("rack_id", "NetBox rack ID"),
                str_p("rack_name", "Rack name (alternative to ID)").with_filter_key("name"),
            ],
        ),
        ToolDescriptor::search(
            "search_rack_reservations",
            "Search for rack reservations",
            "dcim/rack-reservations",
            vec![
                str_p("rack", "Rack name"),
                str_p("user", "User who made the reservation"),
                ParamSpec::partial("description", "Reservation description (partial match)"),
            ],
        ),
        ToolDescriptor::detail(
            "get_rack_reservation_details",
            "Get detailed information about a specific rack reservation",
            detail("dcim/rack-reservations", "reservation_id", &[]),
            vec![int_p("reservation_id", "NetBox rack reservation ID")],
        ),
        ToolDescriptor::search(
            "search_rack_roles",
            "Search for rack roles",
            "dcim/rack-roles",
            vec![
                ParamSpec::partial("name", "Rack role name (partial match)"),
                str_p("slug", "Rack role slug"),
            ],
        ),
        ToolDescriptor::search(
            "search_rack_types",
            "Search for rack types",
            "dcim/rack-types",
            vec![
                ParamSpec::partial("model", "Rack type model (partial match)"),
                str_p("manufacturer", "Manufacturer name"),
                str_p("slug", "Rack type slug"),
                int_p("u_height", "Height in rack units"),
            ],
        ),
        ToolDescriptor::search(
            "search_device_bays",
            "Search for device bays in NetBox",
            "dcim/device-bays",
            vec![
                int_p("device_id", "NetBox device ID"),
                ParamSpec::related(
                    "device_name",
                    "Device name (alternative to ID)",
                    "dcim/devices",
                    "name",
                    "device_id",
                ),
                ParamSpec::partial("name", "Device bay name (partial match)"),
            ],
        ),
        ToolDescriptor::detail(
            "get_device_bay_details",
            "Get detailed information about a specific device bay",
            detail("dcim/device-bays", "bay_id", &["bay_name"]),
            vec![
                int_p("bay_id", "NetBox device bay ID"),
                int_p("device_id", "Constrain the bay lookup to one device"),
                str_p("bay_name", "Device bay name (alternative to ID)").with_filter_key("name"),
            ],
        ),
        ToolDescriptor::search(
            "search_device_bay_templates",
            "Search for device bay templates in NetBox",
            "dcim/device-bay-templates",
            vec![
                int_p("device_type_id", "NetBox device type ID"),
                ParamSpec::partial("name", "Template name (partial match)"),
            ],
        ),
        ToolDescriptor::detail(
            "get_device_bay_template_details",
            "Get detailed information about a specific device bay template",
            detail("dcim/device-bay-templates", "template_id", &[]),
            vec![int_p("template_id", "NetBox device bay template ID")],
        ),
        ToolDescriptor::search(
            "search_device_roles",
            "Search for device roles in NetBox",
            "dcim/device-roles",
            vec![
                ParamSpec::partial("name", "Device role name (partial match)"),
                str_p("slug", "Device role slug"),
                str_p("color", "Role color"),
            ],
        ),
        ToolDescriptor::detail(
            "get_device_role_details",
            "Get detailed information about a specific device role",
            detail("dcim/device-roles", "role_id", &["role_name", "role_slug"]),
            vec![
                int_p("role_id", "NetBox device role ID"),
                str_p("role_name", "Device role name (alternative to ID)").with_filter_key("name"),
                str_p("role_slug", "Device role slug (alternative to ID)").with_filter_key("slug"),
            ],
        ),
        ToolDescriptor::search(
            "search_device_types",
            "Search for device types in NetBox",
            "dcim/device-types",
            vec![
                ParamSpec::partial("model", "Device type model (partial match)"),
                str_p("manufacturer", "Manufacturer name"),
                str_p("slug", "Device type slug"),
                ParamSpec::partial("part_number", "Part number (partial match)"),
            ],
        ),
        ToolDescriptor::detail(
            "get_device_type_details",
            "Get detailed information about a specific device type",
            detail("dcim/device-types", "type_id", &["model", "slug"]),
            vec![
                int_p("type_id", "NetBox device type ID"),
                str_p("model", "Device type model (alternative to ID)"),
                str_p("slug", "Device type slug (alternative to ID)"),
            ],
        ),
        ToolDescriptor::search(
            "search_site_groups",
            "Search for site groups in NetBox",
            "dcim/site-groups",
            vec![
                ParamSpec::partial("name", "Site group name (partial match)"),
                str_p("slug", "Site group slug"),
                str_p("parent", "Parent site group"),
            ],
        ),
        ToolDescriptor::detail(
            "get_site_group_details",
            "Get detailed information about a specific site group",
            detail("dcim/site-groups", "group_id", &["name", "slug"]),
            vec![
                int_p("group_id", "NetBox site group ID"),
                str_p("name", "Site group name (alternative to ID)"),
                str_p("slug", "Site group slug (alternative to ID)"),
            ],
        ),
        ToolDescriptor::search(
            "search_regions",
            "Search for regions in NetBox",
            "dcim/regions",
            vec![
                ParamSpec::partial("name", "Region name (partial match)"),
                str_p("slug", "Region slug"),
                str_p("parent", "Parent region"),
            ],
        ),
        ToolDescriptor::detail(
            "get_region_details",
            "Get detailed information about a specific region",
            detail("dcim/regions", "region_id", &["name", "slug"]),
            vec![
                int_p("region_id", "NetBox region ID"),
                str_p("name", "Region name (alternative to ID)"),
                str_p("slug", "Region slug (alternative to ID)"),
            ],
        ),
        ToolDescriptor::search(
            "search_manufacturers",
            "Search for device manufacturers in NetBox",
            "dcim/manufacturers",
            vec![
                ParamSpec::partial("name", "Manufacturer name (partial match)"),
                str_p("slug", "Manufacturer slug"),
            ],
        ),
        ToolDescriptor::search(
            "search_platforms",
            "Search for device platforms in NetBox",
            "dcim/platforms",
            vec![
                ParamSpec::partial("name", "Platform name (partial match)"),
                str_p("slug", "Platform slug"),
                str_p("manufacturer", "Manufacturer name"),
            ],
        ),
        ToolDescriptor::search(
            "search_cables",
            "Search for cables in NetBox",
            "dcim/cables",
            vec![
                ParamSpec::partial("label", "Cable label (partial match)"),
                str_p("type", "Cable type"),
                str_p("status", "Cable status"),
                str_p("color", "Cable color"),
                str_p("device", "Connected device name"),
                str_p("site", "Site name"),
            ],
        ),
        ToolDescriptor::detail(
            "get_cable_details",
            "Get detailed information about a specific cable",
            detail("dcim/cables", "cable_id", &[]),
            vec![int_p("cable_id", "NetBox cable ID")],
        ),
        // ------------------------------------------------------------------
        // ipam
        // ------------------------------------------------------------------
        ToolDescriptor::search(
            "search_ip_addresses",
            "Search for IP addresses in NetBox",
            "ipam/ip-addresses",
            vec![
                ParamSpec::substring("address", "IP address or network"),
                str_p("vrf", "VRF name"),
                str_p("status", "IP status"),
            ],
        ),
        ToolDescriptor::search(
            "get_prefixes",
            "Search and list IP prefixes/subnets",
            "ipam/prefixes",
            vec![
                str_p("prefix", "Specific prefix (e.g., '192.168.1.0/24')"),
                str_p("within", "Find prefixes within a larger network"),
                int_p("family", "IP family (4 or 6)"),
                str_p("status", "Prefix status"),
                str_p("site", "Filter by site"),
                str_p("vrf", "Filter by VRF"),
                str_p("role", "Prefix role"),
            ],
        ),
        ToolDescriptor::detail(
            "get_available_ips",
            "Find available IP addresses within a prefix",
            DetailSpec {
                endpoint: "ipam/prefixes",
                id_param: "prefix_id",
                natural_keys: &["prefix"],
                subresource: Some("available-ips"),
            },
            vec![
                int_p("prefix_id", "NetBox prefix ID"),
                str_p("prefix", "Prefix in CIDR notation (alternative to ID)"),
                int_p("count", "Number of IPs to return (default: 10)").with_filter_key("limit"),
            ],
        ),
        ToolDescriptor::search(
            "search_vlans",
            "Search for VLANs",
            "ipam/vlans",
            vec![
                int_p("vid", "VLAN ID"),
                ParamSpec::partial("name", "VLAN name (partial match)"),
                str_p("site", "Filter by site"),
                str_p("group", "VLAN group"),
                str_p("status", "VLAN status"),
            ],
        ),
        ToolDescriptor::search(
            "search_vlan_groups",
            "Search for VLAN groups",
            "ipam/vlan-groups",
            vec![
                ParamSpec::partial("name", "VLAN group name (partial match)"),
                str_p("slug", "VLAN group slug"),
                str_p("site", "Filter by site"),
            ],
        ),
        ToolDescriptor::detail(
            "get_vlan_group_details",
            "Get detailed information about a specific VLAN group",
            detail("ipam/vlan-groups", "group_id", &["name", "slug"]),
            vec![
                int_p("group_id", "NetBox VLAN group ID"),
                str_p("name", "VLAN group name (alternative to ID)"),
                str_p("slug", "VLAN group slug (alternative to ID)"),
            ],
        ),
        ToolDescriptor::search(
            "search_vlan_translation_policies",
            "Search for VLAN translation policies",
            "ipam/vlan-translation-policies",
            vec![
                ParamSpec::partial("name", "Policy name (partial match)"),
                ParamSpec::partial("description", "Policy description (partial match)"),
            ],
        ),
        ToolDescriptor::search(
            "search_vlan_translation_rules",
            "Search for VLAN translation rules",
            "ipam/vlan-translation-rules",
            vec![
                int_p("policy_id", "Translation policy ID"),
                int_p("original_vid", "Original VLAN ID"),
                int_p("translated_vid", "Translated VLAN ID"),
            ],
        ),
        ToolDescriptor::search(
            "search_asns",
            "Search for Autonomous System Numbers (ASNs)",
            "ipam/asns",
            vec![
                int_p("asn", "AS number"),
                ParamSpec::partial("name", "ASN name (partial match)"),
                str_p("rir", "RIR name"),
            ],
        ),
        ToolDescriptor::detail(
            "get_asn_details",
            "Get detailed information about a specific ASN",
            detail("ipam/asns", "asn_id", &["asn"]),
            vec![
                int_p("asn_id", "NetBox ASN object ID"),
                int_p("asn", "AS number (alternative to ID)"),
            ],
        ),
        ToolDescriptor::search(
            "search_asn_ranges",
            "Search for ASN ranges",
            "ipam/asn-ranges",
            vec![
                ParamSpec::partial("name", "ASN range name (partial match)"),
                str_p("rir", "RIR name"),
                int_p("start", "Range start"),
                int_p("end", "Range end"),
            ],
        ),
        ToolDescriptor::detail(
            "get_asn_range_details",
            "Get detailed information about a specific ASN range",
            detail("ipam/asn-ranges", "range_id", &["name"]),
            vec![
                int_p("range_id", "NetBox ASN range ID"),
                str_p("name", "ASN range name (alternative to ID)"),
            ],
        ),
        ToolDescriptor::search(
            "search_aggregates",
            "Search for IP address aggregates",
            "ipam/aggregates",
            vec![
                str_p("prefix", "Aggregate prefix"),
                str_p("rir", "RIR name"),
                int_p("family", "IP family (4 or 6)"),
            ],
        ),
        ToolDescriptor::detail(
            "get_aggregate_details",
            "Get detailed information about a specific aggregate",
            detail("ipam/aggregates", "aggregate_id", &["prefix"]),
            vec![
                int_p("aggregate_id", "NetBox aggregate ID"),
                str_p("prefix", "Aggregate prefix (alternative to ID)"),
            ],
        ),
        ToolDescriptor::search(
            "search_ip_ranges",
            "Search for IP address ranges",
            "ipam/ip-ranges",
            vec![
                str_p("start_address", "Range start address"),
                str_p("end_address", "Range end address"),
                str_p("vrf", "VRF name"),
                str_p("role", "Range role"),
                str_p("status", "Range status"),
            ],
        ),
        ToolDescriptor::detail(
            "get_ip_range_details",
            "Get detailed information about a specific IP range",
            detail("ipam/ip-ranges", "range_id", &["start_address", "end_address"]),
            vec![
                int_p("range_id", "NetBox IP range ID"),
                str_p("start_address", "Range start address (with end_address, alternative to ID)"),
                str_p("end_address", "Range end address (with start_address, alternative to ID)"),
            ],
        ),
        ToolDescriptor::search(
            "search_fhrp_groups",
            "Search for FHRP (First Hop Redundancy Protocol) groups",
            "ipam/fhrp-groups",
            vec![
                ParamSpec::partial("name", "Group name (partial match)"),
                str_p("protocol", "FHRP protocol"),
                int_p("group_id", "Protocol group number"),
                str_p("auth_type", "Authentication type"),
            ],
        ),
        ToolDescriptor::search(
            "search_fhrp_group_assignments",
            "Search for FHRP group assignments to interfaces",
            "ipam/fhrp-group-assignments",
            vec![
                int_p("group_id", "FHRP group ID"),
                int_p("interface_id", "Interface ID"),
                int_p("priority", "Assignment priority"),
            ],
        ),
        ToolDescriptor::search(
            "search_rirs",
            "Search for Regional Internet Registries (RIRs)",
            "ipam/rirs",
            vec![
                ParamSpec::partial("name", "RIR name (partial match)"),
                str_p("slug", "RIR slug"),
            ],
        ),
        ToolDescriptor::detail(
            "get_rir_details",
            "Get detailed information about a specific RIR",
            detail("ipam/rirs", "rir_id", &["name", "slug"]),
            vec![
                int_p("rir_id", "NetBox RIR ID"),
                str_p("name", "RIR name (alternative to ID)"),
                str_p("slug", "RIR slug (alternative to ID)"),
            ],
        ),
        ToolDescriptor::search(
            "search_route_targets",
            "Search for BGP route targets",
            "ipam/route-targets",
            vec![
                ParamSpec::partial("name", "Route target name (partial match)"),
                ParamSpec::partial("description", "Description (partial match)"),
                str_p("tenant", "Tenant name"),
            ],
        ),
        ToolDescriptor::search(
            "search_ipam_roles",
            "Search for IPAM roles (prefix/VLAN roles)",
            "ipam/roles",
            vec![
                ParamSpec::partial("name", "Role name (partial match)"),
                str_p("slug", "Role slug"),
            ],
        ),
        ToolDescriptor::detail(
            "get_ipam_role_details",
            "Get detailed information about a specific IPAM role",
            detail("ipam/roles", "role_id", &["name", "slug"]),
            vec![
                int_p("role_id", "NetBox IPAM role ID"),
                str_p("name", "Role name (alternative to ID)"),
                str_p("slug", "Role slug (alternative to ID)"),
            ],
        ),
        ToolDescriptor::search(
            "search_services",
            "Search for network services",
            "ipam/services",
            vec![
                ParamSpec::partial("name", "Service name (partial match)"),
                int_p("device_id", "Device ID"),
                int_p("virtual_machine_id", "Virtual machine ID"),
                str_p("protocol", "Service protocol"),
                str_p("ports", "Port number"),
            ],
        ),
        ToolDescriptor::search(
            "search_service_templates",
            "Search for service templates",
            "ipam/service-templates",
            vec![
                ParamSpec::partial("name", "Template name (partial match)"),
                str_p("protocol", "Service protocol"),
                str_p("ports", "Port number"),
                ParamSpec::partial("description", "Description (partial match)"),
            ],
        ),
        ToolDescriptor::search(
            "search_vrfs",
            "Search for Virtual Routing and Forwarding instances (VRFs)",
            "ipam/vrfs",
            vec![
                ParamSpec::partial("name", "VRF name (partial match)"),
                str_p("rd", "Route distinguisher"),
            ],
        ),
        ToolDescriptor::detail(
            "get_vrf_details",
            "Get detailed information about a specific VRF",
            detail("ipam/vrfs", "vrf_id", &["name", "rd"]),
            vec![
                int_p("vrf_id", "NetBox VRF ID"),
                str_p("name", "VRF name (alternative to ID)"),
                str_p("rd", "Route distinguisher (alternative to ID)"),
            ],
        ),
        // ------------------------------------------------------------------
        // circuits
        // ------------------------------------------------------------------
        ToolDescriptor::search(
            "search_circuits",
            "Search for circuits",
            "circuits/circuits",
            vec![
                ParamSpec::partial("cid", "Circuit ID (partial match)"),
                str_p("provider", "Provider name"),
                str_p("type", "Circuit type"),
                str_p("status", "Circuit status"),
                str_p("site", "Termination site"),
            ],
        ),
        ToolDescriptor::search(
            "search_providers",
            "Search for circuit providers in NetBox",
            "circuits/providers",
            vec![
                ParamSpec::partial("name", "Provider name (partial match)"),
                str_p("slug", "Provider slug"),
                int_p("asn", "Provider ASN"),
            ],
        ),
        ToolDescriptor::search(
            "search_circuit_types",
            "Search for circuit types in NetBox",
            "circuits/circuit-types",
            vec![
                ParamSpec::partial("name", "Circuit type name (partial match)"),
                str_p("slug", "Circuit type slug"),
            ],
        ),
        // ------------------------------------------------------------------
        // tenancy
        // ------------------------------------------------------------------
        ToolDescriptor::search(
            "search_tenants",
            "Search for tenants in NetBox",
            "tenancy/tenants",
            vec![
                ParamSpec::partial("name", "Tenant name (partial match)"),
                str_p("slug", "Tenant slug"),
                str_p("group", "Tenant group"),
                ParamSpec::partial("description", "Description (partial match)"),
            ],
        ),
        ToolDescriptor::detail(
            "get_tenant_details",
            "Get detailed information about a specific tenant",
            detail("tenancy/tenants", "tenant_id", &["name", "slug"]),
            vec![
                int_p("tenant_id", "NetBox tenant ID"),
                str_p("name", "Tenant name (alternative to ID)"),
                str_p("slug", "Tenant slug (alternative to ID)"),
            ],
        ),
        ToolDescriptor::search(
            "search_tenant_groups",
            "Search for tenant groups in NetBox",
            "tenancy/tenant-groups",
            vec![
                ParamSpec::partial("name", "Tenant group name (partial match)"),
                str_p("slug", "Tenant group slug"),
                str_p("parent", "Parent tenant group"),
                ParamSpec::partial("description", "Description (partial match)"),
            ],
        ),
        ToolDescriptor::detail(
            "get_tenant_group_details",
            "Get detailed information about a specific tenant group",
            detail("tenancy/tenant-groups", "group_id", &["name", "slug"]),
            vec![
                int_p("group_id", "NetBox tenant group ID"),
                str_p("name", "Tenant group name (alternative to ID)"),
                str_p("slug", "Tenant group slug (alternative to ID)"),
            ],
        ),
        ToolDescriptor::search(
            "search_contacts",
            "Search for contacts in NetBox",
            "tenancy/contacts",
            vec![
                ParamSpec::partial("name", "Contact name (partial match)"),
                ParamSpec::partial("email", "Email address (partial match)"),
                str_p("group", "Contact group"),
                ParamSpec::partial("title", "Job title (partial match)"),
            ],
        ),
        ToolDescriptor::detail(
            "get_contact_details",
            "Get detailed information about a specific contact",
            detail("tenancy/contacts", "contact_id", &["name", "email"]),
            vec![
                int_p("contact_id", "NetBox contact ID"),
                str_p("name", "Contact name (alternative to ID)"),
                str_p("email", "Email address (alternative to ID)"),
            ],
        ),
        ToolDescriptor::search(
            "search_contact_groups",
            "Search for contact groups in NetBox",
            "tenancy/contact-groups",
            vec![
                ParamSpec::partial("name", "Contact group name (partial match)"),
                str_p("slug", "Contact group slug"),
                str_p("parent", "Parent contact group"),
                ParamSpec::partial("description", "Description (partial match)"),
            ],
        ),
        ToolDescriptor::detail(
            "get_contact_group_details",
            "Get detailed information about a specific contact group",
            detail("tenancy/contact-groups", "group_id", &["name", "slug"]),
            vec![
                int_p("group_id", "NetBox contact group ID"),
                str_p("name", "Contact group name (alternative to ID)"),
                str_p("slug", "Contact group slug (alternative to ID)"),
            ],
        ),
        ToolDescriptor::search(
            "search_contact_roles",
            "Search for contact roles in NetBox",
            "tenancy/contact-roles",
            vec![
                ParamSpec::partial("name", "Contact role name (partial match)"),
                str_p("slug", "Contact role slug"),
                ParamSpec::partial("description", "Description (partial match)"),
            ],
        ),
        ToolDescriptor::detail(
            "get_contact_role_details",
            "Get detailed information about a specific contact role",
            detail("tenancy/contact-roles", "role_id", &["name", "slug"]),
            vec![
                int_p("role_id", "NetBox contact role ID"),
                str_p("name", "Contact role name (alternative to ID)"),
                str_p("slug", "Contact role slug (alternative to ID)"),
            ],
        ),
        // ------------------------------------------------------------------
        // virtualization
        // ------------------------------------------------------------------
        ToolDescriptor::search(
            "search_virtual_machines",
            "Search for virtual machines in NetBox",
            "virtualization/virtual-machines",
            vec![
                ParamSpec::partial("name", "VM name (partial match)"),
                str_p("cluster", "Cluster name"),
                str_p("site", "Site name"),
                str_p("status", "VM status"),
                str_p("role", "VM role"),
                str_p("platform", "Platform name"),
            ],
        ),
        ToolDescriptor::detail(
            "get_virtual_machine_details",
            "Get detailed information about a specific virtual machine",
            detail("virtualization/virtual-machines", "vm_id", &["name"]),
            vec![
                int_p("vm_id", "NetBox virtual machine ID"),
                str_p("name", "VM name (alternative to ID)"),
            ],
        ),
        ToolDescriptor::search(
            "search_clusters",
            "Search for virtualization clusters in NetBox",
            "virtualization/clusters",
            vec![
                ParamSpec::partial("name", "Cluster name (partial match)"),
                str_p("type", "Cluster type"),
                str_p("group", "Cluster group"),
                str_p("site", "Site name"),
            ],
        ),
        ToolDescriptor::detail(
            "get_cluster_details",
            "Get detailed information about a specific cluster",
            detail("virtualization/clusters", "cluster_id", &["name"]),
            vec![
                int_p("cluster_id", "NetBox cluster ID"),
                str_p("name", "Cluster name (alternative to ID)"),
            ],
        ),
        // ------------------------------------------------------------------
        // extras
        // ------------------------------------------------------------------
        ToolDescriptor::search(
            "search_tags",
            "Search for tags in NetBox",
            "extras/tags",
            vec![
                ParamSpec::partial("name", "Tag name (partial match)"),
                str_p("slug", "Tag slug"),
                str_p("color", "Tag color"),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_builds() {
        let registry = build_registry().unwrap();
        assert!(registry.len() >= 60, "catalog unexpectedly small");
    }
}
