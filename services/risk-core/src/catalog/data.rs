//! Builtin scenario dataset
//!
//! Content is grouped by threat category and listed in the order shown to
//! assessors. Protection scores: 1 = strong protection, 5 = weak/missing.

use super::{Scenario, ScenarioGroup, ScenarioOption, ScenarioQuestion};
use types::levels::RiskLevel;
use types::threat::ThreatCategory;

pub(super) const CATALOG_VERSION: &str = "2026.1";

fn opt(label: &str, protection_score: u8) -> ScenarioOption {
    ScenarioOption {
        label: label.to_string(),
        protection_score,
    }
}

fn question(id: &str, prompt: &str, options: Vec<ScenarioOption>) -> ScenarioQuestion {
    ScenarioQuestion {
        id: id.to_string(),
        prompt: prompt.to_string(),
        options,
    }
}

#[allow(clippy::too_many_arguments)]
fn scenario(
    id: &str,
    name: &str,
    category: ThreatCategory,
    typical_probability: RiskLevel,
    typical_impact: RiskLevel,
    controls: &[&str],
    questions: Vec<ScenarioQuestion>,
) -> Scenario {
    Scenario {
        id: id.to_string(),
        name: name.to_string(),
        category,
        typical_probability,
        typical_impact,
        controls: controls.iter().map(|c| c.to_string()).collect(),
        questions,
    }
}

pub(super) fn groups() -> Vec<ScenarioGroup> {
    vec![
        ScenarioGroup {
            category: ThreatCategory::Natural,
            scenarios: natural_scenarios(),
        },
        ScenarioGroup {
            category: ThreatCategory::Personnel,
            scenarios: personnel_scenarios(),
        },
        ScenarioGroup {
            category: ThreatCategory::Organizational,
            scenarios: organizational_scenarios(),
        },
        ScenarioGroup {
            category: ThreatCategory::Technological,
            scenarios: technological_scenarios(),
        },
    ]
}

fn natural_scenarios() -> Vec<Scenario> {
    vec![
        scenario(
            "fire",
            "Fire in server room or offices",
            ThreatCategory::Natural,
            RiskLevel::Low,
            RiskLevel::Critical,
            &[
                "Automatic smoke and heat detection",
                "Gas-based fire suppression in the server room",
                "Periodic evacuation and fire drills",
                "Off-site backups",
            ],
            vec![
                question(
                    "fire_detection",
                    "Are the server room and offices covered by automatic smoke detection?",
                    vec![
                        opt("Yes, with 24/7 monitored alarms", 1),
                        opt("Yes, but alarms are only audible locally", 2),
                        opt("Only in some areas", 4),
                        opt("No automatic detection", 5),
                    ],
                ),
                question(
                    "fire_suppression",
                    "Is a fire suppression system installed in the server room?",
                    vec![
                        opt("Gas-based automatic suppression", 1),
                        opt("Sprinklers or portable extinguishers only", 3),
                        opt("No suppression system", 5),
                    ],
                ),
                question(
                    "fire_flammables",
                    "How are flammable materials handled near IT equipment?",
                    vec![
                        opt("Strictly prohibited and enforced", 1),
                        opt("Limited and stored in cabinets", 2),
                        opt("Present without specific rules", 4),
                    ],
                ),
                question(
                    "fire_drills",
                    "Are evacuation and fire response drills performed?",
                    vec![
                        opt("At least yearly, with documented outcomes", 1),
                        opt("Occasionally", 3),
                        opt("Never", 5),
                    ],
                ),
            ],
        ),
        scenario(
            "flood",
            "Flooding or water damage",
            ThreatCategory::Natural,
            RiskLevel::Low,
            RiskLevel::High,
            &[
                "Server room above ground level",
                "Water leakage detection",
                "Off-site backups",
            ],
            vec![
                question(
                    "flood_location",
                    "Where is the server room located?",
                    vec![
                        opt("Above ground level, away from water pipes", 1),
                        opt("Ground floor", 3),
                        opt("Basement or below known flood level", 5),
                    ],
                ),
                question(
                    "flood_detection",
                    "Is water leakage detection installed?",
                    vec![
                        opt("Yes, with automatic alerts", 1),
                        opt("No, but visual checks are routine", 3),
                        opt("No detection at all", 5),
                    ],
                ),
                question(
                    "flood_backup",
                    "Are backups stored outside the potentially flooded site?",
                    vec![
                        opt("Yes, off-site or cloud with tested restore", 1),
                        opt("Yes, but restore is untested", 2),
                        opt("No, backups stay on-site", 5),
                    ],
                ),
            ],
        ),
        scenario(
            "power_outage",
            "Prolonged power outage",
            ThreatCategory::Natural,
            RiskLevel::Medium,
            RiskLevel::High,
            &[
                "UPS sized for controlled shutdown",
                "Backup generator with fuel contract",
                "Documented shutdown and restart procedures",
            ],
            vec![
                question(
                    "power_ups",
                    "Is critical equipment protected by UPS units?",
                    vec![
                        opt("Yes, tested regularly and sized for shutdown", 1),
                        opt("Yes, but untested or undersized", 3),
                        opt("No UPS protection", 5),
                    ],
                ),
                question(
                    "power_generator",
                    "Is a backup generator available for prolonged outages?",
                    vec![
                        opt("Yes, with automatic failover and fuel contract", 1),
                        opt("Yes, started manually", 2),
                        opt("No generator", 4),
                    ],
                ),
                question(
                    "power_procedures",
                    "Do documented shutdown/restart procedures exist?",
                    vec![
                        opt("Yes, tested at least yearly", 1),
                        opt("Yes, but never exercised", 3),
                        opt("No procedures", 5),
                    ],
                ),
            ],
        ),
    ]
}

fn personnel_scenarios() -> Vec<Scenario> {
    vec![
        scenario(
            "social_engineering",
            "Phishing and social engineering",
            ThreatCategory::Personnel,
            RiskLevel::High,
            RiskLevel::High,
            &[
                "Security awareness training",
                "Phishing simulation campaigns",
                "Email filtering and sender authentication",
                "Reporting channel for suspicious messages",
            ],
            vec![
                question(
                    "se_training",
                    "Do staff receive security awareness training?",
                    vec![
                        opt("Yearly mandatory training with verification", 1),
                        opt("Training at hire only", 3),
                        opt("No structured training", 5),
                    ],
                ),
                question(
                    "se_simulations",
                    "Are phishing simulations run against staff?",
                    vec![
                        opt("Regular campaigns with follow-up coaching", 1),
                        opt("Occasional campaigns", 2),
                        opt("Never", 4),
                    ],
                ),
                question(
                    "se_filtering",
                    "Is inbound email filtered (anti-phishing, SPF/DKIM/DMARC)?",
                    vec![
                        opt("Yes, with enforced sender authentication", 1),
                        opt("Basic spam filtering only", 3),
                        opt("No filtering", 5),
                    ],
                ),
                question(
                    "se_reporting",
                    "Can staff easily report suspicious messages?",
                    vec![
                        opt("One-click reporting with triage", 1),
                        opt("Informal reporting to IT", 2),
                        opt("No reporting channel", 4),
                    ],
                ),
            ],
        ),
        scenario(
            "insider_abuse",
            "Abuse of privileges by internal staff",
            ThreatCategory::Personnel,
            RiskLevel::Medium,
            RiskLevel::High,
            &[
                "Least-privilege access model",
                "Periodic access reviews",
                "Activity logging on critical systems",
                "Segregation of duties for sensitive operations",
            ],
            vec![
                question(
                    "insider_least_privilege",
                    "Are access rights assigned on a least-privilege basis?",
                    vec![
                        opt("Yes, role-based with approval workflow", 1),
                        opt("Partially, some broad accounts remain", 3),
                        opt("Most staff have broad access", 5),
                    ],
                ),
                question(
                    "insider_reviews",
                    "Are access rights reviewed periodically?",
                    vec![
                        opt("Quarterly documented reviews", 1),
                        opt("Yearly or ad hoc reviews", 2),
                        opt("Never reviewed", 5),
                    ],
                ),
                question(
                    "insider_logging",
                    "Is privileged activity on critical systems logged?",
                    vec![
                        opt("Logged and independently reviewed", 1),
                        opt("Logged but rarely reviewed", 3),
                        opt("Not logged", 5),
                    ],
                ),
            ],
        ),
        scenario(
            "key_person_loss",
            "Loss of key personnel and their knowledge",
            ThreatCategory::Personnel,
            RiskLevel::Medium,
            RiskLevel::Medium,
            &[
                "Documented operating procedures",
                "Cross-training and deputies for key roles",
                "Structured off-boarding",
            ],
            vec![
                question(
                    "kp_documentation",
                    "Are critical operational procedures documented?",
                    vec![
                        opt("Yes, complete and kept current", 1),
                        opt("Partially documented", 3),
                        opt("Knowledge lives only with individuals", 5),
                    ],
                ),
                question(
                    "kp_crosstraining",
                    "Is there a deputy trained for each key role?",
                    vec![
                        opt("Yes, for every key role", 1),
                        opt("For some roles", 3),
                        opt("Single points of failure exist", 5),
                    ],
                ),
                question(
                    "kp_offboarding",
                    "Does off-boarding include a structured handover?",
                    vec![
                        opt("Yes, with checklist and knowledge transfer", 1),
                        opt("Informal handover", 3),
                        opt("No handover process", 4),
                    ],
                ),
            ],
        ),
    ]
}

fn organizational_scenarios() -> Vec<Scenario> {
    vec![
        scenario(
            "vendor_failure",
            "Critical supplier or service provider failure",
            ThreatCategory::Organizational,
            RiskLevel::Medium,
            RiskLevel::High,
            &[
                "Supplier assessment before onboarding",
                "Contractual SLAs and exit clauses",
                "Identified alternatives for critical services",
            ],
            vec![
                question(
                    "vendor_assessment",
                    "Are critical suppliers assessed for security and continuity?",
                    vec![
                        opt("Yes, before onboarding and periodically after", 1),
                        opt("Only at onboarding", 2),
                        opt("No assessment", 5),
                    ],
                ),
                question(
                    "vendor_sla",
                    "Do contracts define SLAs and exit support?",
                    vec![
                        opt("Yes, with penalties and data return clauses", 1),
                        opt("Generic contracts without SLAs", 3),
                        opt("No written contracts for some suppliers", 5),
                    ],
                ),
                question(
                    "vendor_alternatives",
                    "Are alternative providers identified for critical services?",
                    vec![
                        opt("Yes, with tested switch-over plans", 1),
                        opt("Identified but never exercised", 2),
                        opt("No alternatives identified", 4),
                    ],
                ),
            ],
        ),
        scenario(
            "process_failure",
            "Missing or ignored operating procedures",
            ThreatCategory::Organizational,
            RiskLevel::Medium,
            RiskLevel::Medium,
            &[
                "Documented and approved procedures",
                "Internal audit programme",
                "Management review of exceptions",
            ],
            vec![
                question(
                    "proc_documented",
                    "Are security-relevant processes documented and approved?",
                    vec![
                        opt("Yes, versioned and approved", 1),
                        opt("Drafts exist but are not maintained", 3),
                        opt("Undocumented practice", 5),
                    ],
                ),
                question(
                    "proc_audit",
                    "Is adherence to procedures audited?",
                    vec![
                        opt("Yearly internal audits with follow-up", 1),
                        opt("Spot checks only", 3),
                        opt("Never audited", 5),
                    ],
                ),
                question(
                    "proc_exceptions",
                    "Are exceptions to procedures tracked and reviewed?",
                    vec![
                        opt("Yes, with management sign-off", 1),
                        opt("Tracked informally", 3),
                        opt("Not tracked", 4),
                    ],
                ),
            ],
        ),
        scenario(
            "regulatory_breach",
            "Non-compliance with legal or regulatory obligations",
            ThreatCategory::Organizational,
            RiskLevel::Low,
            RiskLevel::High,
            &[
                "Register of applicable obligations",
                "Compliance reviews with legal support",
                "Data protection impact assessments",
            ],
            vec![
                question(
                    "reg_register",
                    "Is a register of applicable legal obligations maintained?",
                    vec![
                        opt("Yes, reviewed at least yearly", 1),
                        opt("Exists but outdated", 3),
                        opt("No register", 5),
                    ],
                ),
                question(
                    "reg_reviews",
                    "Are compliance reviews performed?",
                    vec![
                        opt("Regularly, with legal or DPO involvement", 1),
                        opt("Only after incidents or complaints", 4),
                        opt("Never", 5),
                    ],
                ),
            ],
        ),
    ]
}

fn technological_scenarios() -> Vec<Scenario> {
    vec![
        scenario(
            "malware",
            "Malware or ransomware outbreak",
            ThreatCategory::Technological,
            RiskLevel::High,
            RiskLevel::Critical,
            &[
                "Endpoint protection on all devices",
                "Timely security patching",
                "Offline or immutable backups",
                "Network segmentation",
            ],
            vec![
                question(
                    "malware_endpoint",
                    "Is endpoint protection deployed and centrally managed?",
                    vec![
                        opt("Yes, on all devices with central alerting", 1),
                        opt("On most devices", 2),
                        opt("Partial or unmanaged coverage", 4),
                        opt("No endpoint protection", 5),
                    ],
                ),
                question(
                    "malware_patching",
                    "How quickly are security patches applied?",
                    vec![
                        opt("Within days, with an enforced process", 1),
                        opt("Monthly cycles", 2),
                        opt("Irregularly", 4),
                        opt("Systems run unsupported software", 5),
                    ],
                ),
                question(
                    "malware_backups",
                    "Would backups survive a ransomware attack?",
                    vec![
                        opt("Offline/immutable copies with tested restore", 1),
                        opt("Online copies on a separate network", 3),
                        opt("Backups reachable from user network", 5),
                    ],
                ),
                question(
                    "malware_segmentation",
                    "Is the network segmented to limit propagation?",
                    vec![
                        opt("Yes, with filtered inter-zone traffic", 1),
                        opt("Basic separation of servers and clients", 3),
                        opt("Flat network", 5),
                    ],
                ),
            ],
        ),
        scenario(
            "unauthorized_access",
            "Unauthorized access to systems or data",
            ThreatCategory::Technological,
            RiskLevel::Medium,
            RiskLevel::Critical,
            &[
                "Multi-factor authentication for remote and privileged access",
                "Password policy with centralized identity",
                "Prompt de-provisioning of leavers",
                "Access log monitoring",
            ],
            vec![
                question(
                    "ua_mfa",
                    "Is multi-factor authentication enforced?",
                    vec![
                        opt("For all remote and privileged access", 1),
                        opt("For some services", 3),
                        opt("Password-only everywhere", 5),
                    ],
                ),
                question(
                    "ua_identity",
                    "Is identity managed centrally with a password policy?",
                    vec![
                        opt("Central identity provider, strong policy", 1),
                        opt("Mixed local accounts", 3),
                        opt("Shared or default credentials in use", 5),
                    ],
                ),
                question(
                    "ua_deprovisioning",
                    "How quickly are leavers' accounts disabled?",
                    vec![
                        opt("Same day, driven by HR workflow", 1),
                        opt("Within a week", 3),
                        opt("No defined process", 5),
                    ],
                ),
                question(
                    "ua_monitoring",
                    "Are authentication logs monitored for anomalies?",
                    vec![
                        opt("Yes, with automated alerting", 1),
                        opt("Logs kept but reviewed after incidents only", 3),
                        opt("No log retention", 5),
                    ],
                ),
            ],
        ),
        scenario(
            "data_breach",
            "Exfiltration or accidental disclosure of sensitive data",
            ThreatCategory::Technological,
            RiskLevel::Medium,
            RiskLevel::Critical,
            &[
                "Data classification and handling rules",
                "Encryption at rest and in transit",
                "Data loss prevention on egress channels",
            ],
            vec![
                question(
                    "db_classification",
                    "Is sensitive data classified with handling rules?",
                    vec![
                        opt("Yes, applied and understood by staff", 1),
                        opt("Classification exists on paper only", 3),
                        opt("No classification", 5),
                    ],
                ),
                question(
                    "db_encryption",
                    "Is sensitive data encrypted at rest and in transit?",
                    vec![
                        opt("Yes, both, with managed keys", 1),
                        opt("In transit only", 3),
                        opt("No systematic encryption", 5),
                    ],
                ),
                question(
                    "db_dlp",
                    "Are egress channels (email, removable media, cloud) controlled?",
                    vec![
                        opt("DLP rules with blocking for sensitive data", 1),
                        opt("Monitoring without blocking", 2),
                        opt("No egress controls", 4),
                    ],
                ),
            ],
        ),
        scenario(
            "system_outage",
            "Failure of critical IT systems",
            ThreatCategory::Technological,
            RiskLevel::Medium,
            RiskLevel::High,
            &[
                "Redundancy for critical components",
                "Monitored capacity and health",
                "Tested recovery procedures with defined RTO",
            ],
            vec![
                question(
                    "outage_redundancy",
                    "Do critical systems have redundancy?",
                    vec![
                        opt("Yes, with automatic failover", 1),
                        opt("Cold spares available", 3),
                        opt("Single instances only", 5),
                    ],
                ),
                question(
                    "outage_monitoring",
                    "Are system health and capacity monitored?",
                    vec![
                        opt("Proactive monitoring with alerting", 1),
                        opt("Basic availability checks", 3),
                        opt("Failures noticed by users", 5),
                    ],
                ),
                question(
                    "outage_recovery",
                    "Are recovery procedures tested against a defined RTO?",
                    vec![
                        opt("Yes, tested at least yearly", 1),
                        opt("Procedures exist but untested", 3),
                        opt("No recovery procedures", 5),
                    ],
                ),
            ],
        ),
    ]
}
