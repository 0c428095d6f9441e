#![no_std]

multiversx_sc::imports!();

pub mod campus_ledger_proxy;
pub mod types;

use types::{CampaignStatus, ProposalStatus};

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait CampusLedger {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, min_contribution: BigUint) {
        require!(
            min_contribution > 0u64,
            "Minimum contribution must be positive"
        );
        self.min_contribution().set(&min_contribution);
        self.proposal_cycle().set(0u64);
        self.campaign_cycle().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: registerParticipant
    // Opt-in. A participant record is required before voting
    // or contributing.
    // ========================================================

    #[endpoint(registerParticipant)]
    fn register_participant(&self) {
        self.require_not_deleted();
        let caller = self.blockchain().get_caller();
        require!(
            self.participants().insert(caller.clone()),
            "Already registered"
        );
        self.participant_registered_event(&caller);
    }

    // ========================================================
    // ENDPOINT: setupMembershipToken
    // Sets the ESDT participants must hold to be eligible to
    // vote. While unset, voting is open to all participants.
    // ========================================================

    #[only_owner]
    #[endpoint(setupMembershipToken)]
    fn setup_membership_token(&self, token_id: TokenIdentifier) {
        self.require_not_deleted();
        self.membership_token().set(&token_id);
        self.membership_token_set_event(&token_id);
    }

    // ========================================================
    // ENDPOINT: startProposal
    // Opens a new voting cycle. The previous tally is
    // discarded; per-participant vote latches expire with the
    // old cycle number.
    // ========================================================

    #[only_owner]
    #[endpoint(startProposal)]
    fn start_proposal(&self, title: ManagedBuffer) {
        self.require_not_deleted();
        let cycle = self.proposal_cycle().get() + 1;
        self.proposal_cycle().set(cycle);
        self.proposal_title().set(&title);
        self.votes_yes().set(0u64);
        self.votes_no().set(0u64);
        self.voting_active().set(true);

        self.proposal_started_event(cycle, &title);
    }

    // ========================================================
    // ENDPOINT: castVote
    // One vote per participant per cycle. If a membership
    // token is configured, the caller must hold at least one
    // unit at the time of the vote.
    // ========================================================

    #[endpoint(castVote)]
    fn cast_vote(&self, support: bool) {
        self.require_not_deleted();
        let caller = self.blockchain().get_caller();
        require!(
            self.participants().contains(&caller),
            "Not a registered participant"
        );
        require!(self.voting_active().get(), "Voting is not active");

        let cycle = self.proposal_cycle().get();
        require!(
            self.voted_in_cycle(&caller).get() != cycle,
            "Already voted in this proposal"
        );

        if !self.membership_token().is_empty() {
            let token_id = self.membership_token().get();
            let holding = self.blockchain().get_esdt_balance(&caller, &token_id, 0);
            require!(
                holding >= 1u64,
                "Caller does not hold the membership token"
            );
        }

        if support {
            self.votes_yes().update(|v| *v += 1);
        } else {
            self.votes_no().update(|v| *v += 1);
        }
        self.voted_in_cycle(&caller).set(cycle);

        self.vote_cast_event(cycle, &caller, support);
    }

    // ========================================================
    // ENDPOINT: closeProposal
    // Freezes the tally. No effect on counters.
    // ========================================================

    #[only_owner]
    #[endpoint(closeProposal)]
    fn close_proposal(&self) {
        self.require_not_deleted();
        self.voting_active().set(false);

        self.proposal_closed_event(
            self.proposal_cycle().get(),
            self.votes_yes().get(),
            self.votes_no().get(),
        );
    }

    // ========================================================
    // ENDPOINT: startCampaign
    // Opens a new funding cycle. Contribution balances from
    // earlier cycles are stale from this point on: they no
    // longer count toward refunds (see claimRefund).
    // ========================================================

    #[only_owner]
    #[endpoint(startCampaign)]
    fn start_campaign(&self, goal: BigUint) {
        self.require_not_deleted();
        require!(goal > 0u64, "Goal must be positive");

        let cycle = self.campaign_cycle().get() + 1;
        self.campaign_cycle().set(cycle);
        self.campaign_goal().set(&goal);
        self.total_raised().set(BigUint::zero());
        self.campaign_active().set(true);

        self.campaign_started_event(cycle, &goal);
    }

    // ========================================================
    // ENDPOINT: contribute
    // EGLD arrives with the call, so the payment and the state
    // update commit or revert as one transaction.
    // ========================================================

    #[endpoint(contribute)]
    #[payable("EGLD")]
    fn contribute(&self) {
        self.require_not_deleted();
        let caller = self.blockchain().get_caller();
        require!(
            self.participants().contains(&caller),
            "Not a registered participant"
        );
        require!(self.campaign_active().get(), "Campaign is not active");

        let payment_amount = self.call_value().egld_value().clone_value();
        require!(
            payment_amount >= self.min_contribution().get(),
            "Contribution below minimum"
        );

        let cycle = self.campaign_cycle().get();
        if self.contribution_cycle(&caller).get() == cycle {
            self.contribution_balance(&caller)
                .update(|b| *b += &payment_amount);
        } else {
            // First contribution this cycle; any stale balance is replaced.
            self.contribution_cycle(&caller).set(cycle);
            self.contribution_balance(&caller).set(&payment_amount);
        }
        self.total_raised().update(|r| *r += &payment_amount);

        self.contribution_event(cycle, &caller, &payment_amount);
    }

    // ========================================================
    // ENDPOINT: closeCampaign
    // Ends the funding window without moving funds. If the
    // goal was not reached, this opens the refund path.
    // ========================================================

    #[only_owner]
    #[endpoint(closeCampaign)]
    fn close_campaign(&self) {
        self.require_not_deleted();
        self.campaign_active().set(false);

        self.campaign_closed_event(self.campaign_cycle().get());
    }

    // ========================================================
    // ENDPOINT: claimRefund
    // After a failed campaign, each contributor pulls back
    // exactly their own contribution. The balance is cleared
    // before the transfer; both commit in the same transaction,
    // so a second claim always sees zero.
    // ========================================================

    #[endpoint(claimRefund)]
    fn claim_refund(&self) {
        self.require_not_deleted();
        let caller = self.blockchain().get_caller();
        require!(!self.campaign_active().get(), "Campaign is still active");
        require!(
            self.total_raised().get() < self.campaign_goal().get(),
            "Campaign goal was met"
        );

        let cycle = self.campaign_cycle().get();
        require!(
            self.contribution_cycle(&caller).get() == cycle,
            "Nothing to refund"
        );
        let owed = self.contribution_balance(&caller).get();
        require!(owed > 0u64, "Nothing to refund");

        self.contribution_balance(&caller).clear();
        self.send().direct_egld(&caller, &owed);

        self.refund_claimed_event(cycle, &caller, &owed);
    }

    // ========================================================
    // ENDPOINT: withdrawFunds
    // Pays the full custodial balance out to the owner once
    // the goal is met, and ends the campaign.
    // ========================================================

    #[only_owner]
    #[endpoint(withdrawFunds)]
    fn withdraw_funds(&self) {
        self.require_not_deleted();
        require!(
            self.total_raised().get() >= self.campaign_goal().get(),
            "Campaign goal not reached"
        );

        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        require!(balance > 0u64, "Nothing to withdraw");

        let owner = self.blockchain().get_owner_address();
        self.campaign_active().set(false);
        self.send().direct_egld(&owner, &balance);

        self.funds_withdrawn_event(self.campaign_cycle().get(), &owner, &balance);
    }

    // ========================================================
    // ENDPOINT: deleteLedger
    // Terminal. Sweeps any remaining balance to the owner and
    // permanently disables every state-mutating endpoint.
    // ========================================================

    #[only_owner]
    #[endpoint(deleteLedger)]
    fn delete_ledger(&self) {
        self.require_not_deleted();

        let owner = self.blockchain().get_owner_address();
        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);

        self.voting_active().set(false);
        self.campaign_active().set(false);
        self.deleted().set(true);

        if balance > 0u64 {
            self.send().direct_egld(&owner, &balance);
        }

        self.ledger_deleted_event(&owner, &balance);
    }

    // ========================================================
    // INTERNAL: terminal-delete guard
    // ========================================================

    fn require_not_deleted(&self) {
        require!(!self.deleted().get(), "Ledger has been deleted");
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getGovernanceInfo)]
    fn get_governance_info(&self) -> MultiValue5<ManagedBuffer, u64, u64, bool, u64> {
        (
            self.proposal_title().get(),
            self.votes_yes().get(),
            self.votes_no().get(),
            self.voting_active().get(),
            self.proposal_cycle().get(),
        )
            .into()
    }

    #[view(getGovernanceStatus)]
    fn get_governance_status(&self) -> ProposalStatus {
        if self.proposal_cycle().get() == 0 {
            ProposalStatus::NoProposal
        } else if self.voting_active().get() {
            ProposalStatus::VotingOpen
        } else {
            ProposalStatus::VotingClosed
        }
    }

    #[view(getCampaignInfo)]
    fn get_campaign_info(&self) -> MultiValue4<BigUint, BigUint, bool, u64> {
        (
            self.campaign_goal().get(),
            self.total_raised().get(),
            self.campaign_active().get(),
            self.campaign_cycle().get(),
        )
            .into()
    }

    #[view(getCampaignStatus)]
    fn get_campaign_status(&self) -> CampaignStatus {
        if self.campaign_cycle().get() == 0 {
            CampaignStatus::NoCampaign
        } else if self.campaign_active().get() {
            CampaignStatus::Open
        } else if self.total_raised().get() >= self.campaign_goal().get() {
            CampaignStatus::GoalMet
        } else {
            CampaignStatus::GoalUnmet
        }
    }

    #[view(getContribution)]
    fn get_contribution(&self, participant: &ManagedAddress) -> BigUint {
        if self.contribution_cycle(participant).get() == self.campaign_cycle().get() {
            self.contribution_balance(participant).get()
        } else {
            BigUint::zero()
        }
    }

    #[view(hasVoted)]
    fn has_voted(&self, participant: &ManagedAddress) -> bool {
        let cycle = self.proposal_cycle().get();
        cycle != 0 && self.voted_in_cycle(participant).get() == cycle
    }

    #[view(isParticipant)]
    fn is_participant(&self, address: &ManagedAddress) -> bool {
        self.participants().contains(address)
    }

    #[view(getParticipantCount)]
    fn get_participant_count(&self) -> u64 {
        self.participants().len() as u64
    }

    #[view(getMembershipToken)]
    fn get_membership_token(&self) -> OptionalValue<TokenIdentifier> {
        if self.membership_token().is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.membership_token().get())
        }
    }

    #[view(getMinContribution)]
    fn get_min_contribution(&self) -> BigUint {
        self.min_contribution().get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("participantRegistered")]
    fn participant_registered_event(&self, #[indexed] participant: &ManagedAddress);

    #[event("membershipTokenSet")]
    fn membership_token_set_event(&self, #[indexed] token_id: &TokenIdentifier);

    #[event("proposalStarted")]
    fn proposal_started_event(&self, #[indexed] cycle: u64, title: &ManagedBuffer);

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] cycle: u64,
        #[indexed] voter: &ManagedAddress,
        support: bool,
    );

    #[event("proposalClosed")]
    fn proposal_closed_event(
        &self,
        #[indexed] cycle: u64,
        #[indexed] votes_yes: u64,
        votes_no: u64,
    );

    #[event("campaignStarted")]
    fn campaign_started_event(&self, #[indexed] cycle: u64, goal: &BigUint);

    #[event("contribution")]
    fn contribution_event(
        &self,
        #[indexed] cycle: u64,
        #[indexed] contributor: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("campaignClosed")]
    fn campaign_closed_event(&self, #[indexed] cycle: u64);

    #[event("refundClaimed")]
    fn refund_claimed_event(
        &self,
        #[indexed] cycle: u64,
        #[indexed] contributor: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("fundsWithdrawn")]
    fn funds_withdrawn_event(
        &self,
        #[indexed] cycle: u64,
        #[indexed] receiver: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("ledgerDeleted")]
    fn ledger_deleted_event(&self, #[indexed] receiver: &ManagedAddress, swept: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("minContribution")]
    fn min_contribution(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("membershipToken")]
    fn membership_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[storage_mapper("deleted")]
    fn deleted(&self) -> SingleValueMapper<bool>;

    // ── Participants ──

    #[storage_mapper("participants")]
    fn participants(&self) -> UnorderedSetMapper<ManagedAddress>;

    // ── Governance ──

    #[storage_mapper("proposalTitle")]
    fn proposal_title(&self) -> SingleValueMapper<ManagedBuffer>;

    #[storage_mapper("votesYes")]
    fn votes_yes(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("votesNo")]
    fn votes_no(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("votingActive")]
    fn voting_active(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("proposalCycle")]
    fn proposal_cycle(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("votedInCycle")]
    fn voted_in_cycle(&self, voter: &ManagedAddress) -> SingleValueMapper<u64>;

    // ── Crowdfunding ──

    #[storage_mapper("campaignGoal")]
    fn campaign_goal(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalRaised")]
    fn total_raised(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("campaignActive")]
    fn campaign_active(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("campaignCycle")]
    fn campaign_cycle(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("contributionBalance")]
    fn contribution_balance(&self, contributor: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("contributionCycle")]
    fn contribution_cycle(&self, contributor: &ManagedAddress) -> SingleValueMapper<u64>;
}
