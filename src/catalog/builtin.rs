//! Compiled-in catalog used when no external catalog file is configured.

use super::{Catalog, DomainInfo, Operation, OperationSet, ResourceType, Workflow};
use crate::tier::Tier;

/// Build the compiled-in catalog.
pub fn catalog() -> Catalog {
    Catalog {
        domains: domains(),
        resources: resources(),
        workflows: workflows(),
    }
}

fn domains() -> Vec<DomainInfo> {
    vec![
        DomainInfo::new("load_balancer", "Networking")
            .with_description("HTTP, TCP, UDP load balancing and origin pool management")
            .with_aliases(&["lb"])
            .with_use_cases(&[
                "Configure HTTP load balancing for web applications",
                "Manage origin pools and health checks",
                "Route TCP traffic across regions",
            ])
            .with_related(&["cdn", "dns"]),
        DomainInfo::new("dns", "Networking")
            .with_display_name("DNS")
            .with_description("DNS zones, records and global traffic steering")
            .with_use_cases(&[
                "Manage DNS zones and records",
                "Configure DNS load balancing across regions",
            ])
            .with_related(&["load_balancer"]),
        DomainInfo::new("cdn", "Networking")
            .with_display_name("CDN")
            .with_description("Content delivery network, caching, and distribution")
            .with_tier(Tier::Professional)
            .with_use_cases(&[
                "Cache static content at the edge",
                "Configure CDN load balancing for web applications",
            ]),
        DomainInfo::new("network", "Networking")
            .with_description("Networks, routing, BGP, and virtual connectivity")
            .with_aliases(&["net"])
            .with_use_cases(&[
                "Configure BGP routing between sites",
                "Manage virtual networks and segments",
            ]),
        DomainInfo::new("security", "Security")
            .with_description("WAF policies, bot defense, service policies, and threat protection")
            .with_aliases(&["sec"])
            .with_use_cases(&[
                "Protect web applications with WAF policies",
                "Define service policies for traffic control",
            ])
            .with_related(&["api_security"]),
        DomainInfo::new("api_security", "Security")
            .with_display_name("API Security")
            .with_description("API discovery, testing, crawling, and endpoint protection")
            .with_aliases(&["apisec"])
            .with_tier(Tier::Professional)
            .with_use_cases(&[
                "Discover and protect API endpoints",
                "Test API definitions for vulnerabilities",
            ]),
        DomainInfo::new("bot_defense", "Security")
            .with_description("Advanced bot protection and client-side defense")
            .with_aliases(&["bot"])
            .with_tier(Tier::Enterprise)
            .with_use_cases(&["Block automated bot traffic on web applications"]),
        DomainInfo::new("infrastructure_protection", "Security")
            .with_description("DDoS protection, alerts, events, and mitigation policies")
            .with_aliases(&["infraprot"])
            .with_tier(Tier::Enterprise)
            .preview()
            .with_use_cases(&["Mitigate DDoS attacks on network infrastructure"]),
        DomainInfo::new("sites", "Infrastructure")
            .with_description("Sites, fleets, cloud provisioning, and cluster management")
            .with_aliases(&["site"])
            .with_use_cases(&[
                "Deploy AWS VPC sites",
                "Deploy Azure VNet sites",
                "Manage site fleets and upgrades",
            ])
            .with_related(&["network", "cloud_infrastructure"]),
        DomainInfo::new("cloud_infrastructure", "Infrastructure")
            .with_description("Cloud credentials and provider connectivity")
            .with_aliases(&["cloud"])
            .with_use_cases(&["Connect to cloud providers and manage cloud credentials"]),
        DomainInfo::new("kubernetes", "Infrastructure")
            .with_description("Managed Kubernetes clusters and workloads")
            .with_aliases(&["k8s"])
            .with_tier(Tier::Professional)
            .with_use_cases(&["Deploy and manage Kubernetes clusters"])
            .with_related(&["service_mesh"]),
        DomainInfo::new("service_mesh", "Infrastructure")
            .with_description("Service mesh configuration, discovery, and orchestration")
            .with_aliases(&["mesh"])
            .with_tier(Tier::Professional)
            .preview()
            .with_use_cases(&["Configure service discovery for Kubernetes workloads"]),
        DomainInfo::new("observability", "Operations")
            .with_description("Monitoring, logging, alerts, metrics, and dashboards")
            .with_aliases(&["obs", "o11y"])
            .with_use_cases(&[
                "Configure alert policies and receivers",
                "Monitor synthetic health checks",
            ])
            .with_related(&["statistics"]),
        DomainInfo::new("statistics", "Operations")
            .with_description("Usage statistics, flow analytics and reporting")
            .with_aliases(&["stats"])
            .with_use_cases(&["Analyze traffic statistics and flow logs"]),
        DomainInfo::new("identity", "Platform")
            .with_description("Namespaces, users, roles, authentication, and access control")
            .with_aliases(&["iam"])
            .with_use_cases(&[
                "Manage users and roles",
                "Configure authentication for platform access",
            ]),
        DomainInfo::new("tenant_management", "Platform")
            .with_description("Tenant administration, organization management, and governance")
            .with_aliases(&["tenant"])
            .with_tier(Tier::Enterprise)
            .with_use_cases(&["Manage child tenants and delegated administration"]),
        DomainInfo::new("billing", "Platform")
            .with_description("Billing, usage tracking, and payment management")
            .with_tier(Tier::Free)
            .with_use_cases(&["Review invoices and usage quotas"]),
        DomainInfo::new("ai_intelligence", "AI")
            .with_display_name("AI Intelligence")
            .with_description("AI assistant and machine learning features")
            .with_aliases(&["ai"])
            .with_tier(Tier::Professional)
            .preview()
            .with_use_cases(&["Query the AI assistant about security events"]),
    ]
}

fn resources() -> Vec<ResourceType> {
    vec![
        ResourceType::new("http_loadbalancer", "load_balancer")
            .with_description("HTTP load balancer fronting one or more origin pools")
            .also_in("security")
            .also_in("cdn"),
        ResourceType::new("tcp_loadbalancer", "load_balancer")
            .with_description("TCP load balancer"),
        ResourceType::new("udp_loadbalancer", "load_balancer")
            .with_description("UDP load balancer"),
        ResourceType::new("origin_pool", "load_balancer")
            .with_description("Pool of origin servers with endpoint selection")
            .also_in("cdn"),
        ResourceType::new("healthcheck", "load_balancer")
            .with_description("Health check probing origin servers")
            .also_in("observability"),
        ResourceType::new("dns_zone", "dns")
            .with_description("Primary or secondary DNS zone"),
        ResourceType::new("dns_load_balancer", "dns")
            .with_description("DNS based load balancer")
            .also_in("load_balancer"),
        ResourceType::new("dns_lb_pool", "dns")
            .with_description("Pool of DNS load balancer members"),
        ResourceType::new("cdn_loadbalancer", "cdn")
            .with_description("CDN distribution with caching rules")
            .with_required_tier(Tier::Professional),
        ResourceType::new("cdn_cache_rule", "cdn")
            .with_description("Cache rule applied by CDN distributions"),
        ResourceType::new("virtual_network", "network")
            .with_description("Virtual network segment"),
        ResourceType::new("bgp", "network")
            .with_description("BGP peering configuration")
            .also_in("sites"),
        ResourceType::new("network_connector", "network")
            .with_description("Connector between inside and outside networks"),
        ResourceType::new("app_firewall", "security")
            .with_description("Web application firewall policy")
            .also_in("api_security"),
        ResourceType::new("service_policy", "security")
            .with_description("Service policy for request allow/deny rules"),
        ResourceType::new("rate_limiter", "security")
            .with_description("Rate limiter for request throttling")
            .also_in("api_security"),
        ResourceType::new("api_definition", "api_security")
            .with_description("OpenAPI definition used for API protection"),
        ResourceType::new("api_discovery", "api_security")
            .with_description("Discovered API endpoints")
            .with_operations(OperationSet::read_only()),
        ResourceType::new("bot_defense_app_infrastructure", "bot_defense")
            .with_description("Bot defense application infrastructure")
            .with_required_tier(Tier::Enterprise),
        ResourceType::new("infraprotect_asn", "infrastructure_protection")
            .with_description("Protected autonomous system number")
            .with_required_tier(Tier::Enterprise),
        ResourceType::new("aws_vpc_site", "sites")
            .with_description("Site deployed into an AWS VPC"),
        ResourceType::new("azure_vnet_site", "sites")
            .with_description("Site deployed into an Azure VNet"),
        ResourceType::new("fleet", "sites")
            .with_description("Fleet of sites sharing configuration"),
        ResourceType::new("cloud_credentials", "cloud_infrastructure")
            .with_description("Credentials for a cloud provider account")
            .also_in("sites"),
        ResourceType::new("k8s_cluster", "kubernetes")
            .with_description("Managed Kubernetes cluster"),
        ResourceType::new("virtual_k8s", "kubernetes")
            .with_description("Virtual Kubernetes namespace")
            .also_in("service_mesh"),
        ResourceType::new("discovery", "service_mesh")
            .with_description("Service discovery configuration")
            .also_in("kubernetes"),
        ResourceType::new("alert_policy", "observability")
            .with_description("Alert routing policy"),
        ResourceType::new("alert_receiver", "observability")
            .with_description("Alert receiver (slack, pagerduty, email)"),
        ResourceType::new("synthetic_monitor", "observability")
            .with_description("Synthetic HTTP and DNS monitors"),
        ResourceType::new("flow", "statistics")
            .with_description("Flow logs and analytics")
            .with_operations(OperationSet::read_only()),
        ResourceType::new("namespace", "identity")
            .with_description("Namespace isolating configuration objects")
            .with_api_path("/api/web/namespaces", false),
        ResourceType::new("user", "identity")
            .with_description("Tenant user")
            .with_api_path("/api/web/custom/namespaces/{namespace}/users", true),
        ResourceType::new("role", "identity")
            .with_description("Role granting API permissions"),
        ResourceType::new("child_tenant", "tenant_management")
            .with_description("Child tenant managed by this tenant")
            .with_operations(OperationSet::from_ops(&[
                Operation::List,
                Operation::Get,
                Operation::Create,
                Operation::Delete,
            ])),
        ResourceType::new("invoice", "billing")
            .with_description("Billing invoice")
            .with_operations(OperationSet::from_ops(&[Operation::List, Operation::Get])),
        ResourceType::new("ai_assistant", "ai_intelligence")
            .with_description("AI assistant query endpoint")
            .with_api_path("/api/gen-ai/namespaces/{namespace}/query", true)
            .with_operations(OperationSet::read_only()),
    ]
}

fn workflows() -> Vec<Workflow> {
    vec![
        Workflow::new(
            "API Security Workflow",
            "Secure APIs with firewall and threat detection",
            "Security",
            &["api_security", "security", "bot_defense"],
        ),
        Workflow::new(
            "Network Protection Workflow",
            "Protect network infrastructure and applications",
            "Security",
            &["security", "infrastructure_protection", "network"],
        ),
        Workflow::new(
            "Load Balancing Workflow",
            "Configure and manage load balancing across regions",
            "Networking",
            &["dns", "load_balancer", "cdn"],
        ),
        Workflow::new(
            "Access Management Workflow",
            "Manage users and authentication for platform access",
            "Platform",
            &["identity", "tenant_management"],
        ),
        Workflow::new(
            "Kubernetes Management Workflow",
            "Deploy and manage Kubernetes clusters",
            "Infrastructure",
            &["kubernetes", "service_mesh", "observability"],
        ),
        Workflow::new(
            "Cloud Connectivity Workflow",
            "Connect to cloud providers and manage cloud resources",
            "Infrastructure",
            &["cloud_infrastructure", "sites", "network"],
        ),
        Workflow::new(
            "Monitoring and Analytics Workflow",
            "Monitor systems and collect analytics data",
            "Operations",
            &["observability", "statistics"],
        ),
    ]
}
