multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal Status — governance cycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum ProposalStatus {
    /// No proposal has ever been started.
    NoProposal,
    /// Participants can cast votes.
    VotingOpen,
    /// Tally frozen until the next proposal starts.
    VotingClosed,
}

// ============================================================
// Campaign Status — funding cycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum CampaignStatus {
    /// No campaign has ever been started.
    NoCampaign,
    /// Contributions are being accepted.
    Open,
    /// Closed with the goal reached; funds go to the owner.
    GoalMet,
    /// Closed short of the goal; contributors can claim refunds.
    GoalUnmet,
}
